//! 基础设施层：持有网络/浏览器资源，只暴露能力

pub mod api_client;
pub mod navigator;

pub use api_client::{ApiOutcome, HttpMaterialApi, MaterialApi};
pub use navigator::{BrowserNavigator, HttpDownloader, NavigationMode, NavigationTarget, Navigator};

#[cfg(test)]
pub(crate) mod test_server;
