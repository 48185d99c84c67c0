//! ERC4626 interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC4626 {
        // Transaction functions
        function deposit(uint256 assets, address receiver) external returns (uint256 shares);

        // View functions
        function asset() external view returns (address);
        function maxDeposit(address receiver) external view returns (uint256 maxAssets);
    }
}
