//! Platform port - startup entry points of the vendor IoT framework
//!
//! Storage, network, node registration, OTA and insights all live in the
//! collaborator. The node only calls them, in a fixed order, at boot.

use crate::domain::NodeModel;

/// Error reported by a platform entry point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Subsystem failed to initialize
    InitFailed,
    /// Subsystem rejected the supplied configuration or model
    Rejected,
    /// Out of memory or handles
    NoResources,
}

/// Port for the vendor framework's startup sequence
///
/// # Example Implementation
///
/// ```ignore
/// struct RainmakerPlatform { node: Cell<Option<NodeHandle>> }
///
/// impl PlatformPort for RainmakerPlatform {
///     async fn register_node(&self, model: &NodeModel) -> Result<(), PlatformError> {
///         let node = sdk::node_init(model.name, model.node_type).ok_or(PlatformError::InitFailed)?;
///         for device in &model.devices { node.add_device(device)?; }
///         self.node.set(Some(node));
///         Ok(())
///     }
///     // ...
/// }
/// ```
pub trait PlatformPort {
    /// Initialize non-volatile storage (credentials, node config)
    fn init_storage(&self) -> impl core::future::Future<Output = Result<(), PlatformError>>;

    /// Bring up the network stack (not yet connected)
    fn init_network(&self) -> impl core::future::Future<Output = Result<(), PlatformError>>;

    /// Create the cloud node and its devices
    fn register_node(
        &self,
        model: &NodeModel,
    ) -> impl core::future::Future<Output = Result<(), PlatformError>>;

    /// Enable over-the-air updates
    fn enable_ota(&self) -> impl core::future::Future<Output = Result<(), PlatformError>>;

    /// Enable remote diagnostics
    fn enable_insights(&self) -> impl core::future::Future<Output = Result<(), PlatformError>>;

    /// Start the cloud agent
    fn start_cloud(&self) -> impl core::future::Future<Output = Result<(), PlatformError>>;

    /// Connect to the network, provisioning first if needed
    fn start_network(&self) -> impl core::future::Future<Output = Result<(), PlatformError>>;
}
