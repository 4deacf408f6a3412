use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ContractAddressManager {
        function getContractAddressForName(string calldata name) external view returns (address);
        function updateContractAddressesForNames(address[] calldata contractAddresses, string[] calldata names) external;
        function checkIsEthosContract(address targetAddress) external view returns (bool);
    }

    #[sol(rpc)]
    interface InteractionControl {
        function pauseAll() external;
        function unpauseAll() external;
        function pauseContract(string calldata name) external;
        function unpauseContract(string calldata name) external;
    }

    #[sol(rpc)]
    interface EthosAttestation {
        struct AttestationDetails {
            string account;
            string service;
        }

        function createAttestation(uint256 profileId, uint256 randValue, AttestationDetails calldata attestationDetails, string calldata evidence, bytes calldata signature) external;
        function archiveAttestation(string calldata service, string calldata account) external;
        function attestationExistsForHash(bytes32 attestationHash) external view returns (bool);
        function getAttestationHash(string calldata service, string calldata account) external pure returns (bytes32);

        event AttestationCreated(uint256 indexed profileId, string service, string account, uint256 attestationId);
        event AttestationArchived(uint256 indexed profileId, string service, string account, uint256 attestationId);
    }

    #[sol(rpc)]
    interface EthosDiscussion {
        function addReply(address targetContract, uint256 targetId, string calldata content, string calldata metadata) external;
        function editReply(uint256 replyId, string calldata content, string calldata metadata) external;
        function repliesCount() external view returns (uint256);

        event ReplyAdded(uint256 indexed authorProfileId, address indexed targetContract, uint256 replyId);
        event ReplyEdited(uint256 indexed authorProfileId, uint256 replyId);
    }

    #[sol(rpc)]
    interface EthosReview {
        struct AttestationDetails {
            string account;
            string service;
        }

        function addReview(uint8 score, address subject, address paymentToken, string calldata comment, string calldata metadata, AttestationDetails calldata attestationDetails) external payable;
        function editReview(uint256 reviewId, string calldata comment, string calldata metadata) external;
        function archiveReview(uint256 reviewId) external;
        function restoreReview(uint256 reviewId) external;
        function reviewCount() external view returns (uint256);

        event ReviewCreated(uint8 score, address indexed author, bytes32 attestationHash, address indexed subject, uint256 reviewId, uint256 profileId);
        event ReviewArchived(uint256 indexed reviewId, address indexed author, address indexed subject);
    }

    #[sol(rpc)]
    interface EthosVote {
        function voteFor(address targetContract, uint256 targetId, bool isUpvote) external;
        function votesCountFor(address targetContract, uint256 targetId) external view returns (uint256 upvotes, uint256 downvotes);
        function hasVotedFor(uint256 voter, address targetContract, uint256 targetId) external view returns (bool);

        event Voted(bool isUpvote, uint256 indexed voter, address indexed targetContract, uint256 indexed targetId);
        event VoteChanged(bool isUnvote, bool isUpvote, uint256 indexed voter, address indexed targetContract, uint256 indexed targetId);
    }

    #[sol(rpc)]
    interface EthosVouch {
        function vouchByProfileId(uint256 subjectProfileId, string calldata comment, string calldata metadata) external payable;
        function vouchByAddress(address subjectAddress, string calldata comment, string calldata metadata) external payable;
        function unvouch(uint256 vouchId) external;
        function markUnhealthy(uint256 vouchId) external;
        function vouchCount() external view returns (uint256);

        event Vouched(uint256 indexed vouchId, uint256 indexed authorProfileId, uint256 indexed subjectProfileId, uint256 amountStaked);
        event Unvouched(uint256 indexed vouchId, uint256 indexed authorProfileId, uint256 indexed subjectProfileId);
        event MarkedUnhealthy(uint256 indexed vouchId, uint256 indexed authorProfileId, uint256 indexed subjectProfileId);
    }
}
