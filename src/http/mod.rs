// HTTP layer - shared client the resource services delegate to
mod api_client;
mod query;
mod reqwest_client;

pub use api_client::{ApiClient, ApiResponse, ApiResult, HttpMethod, RequestConfig};
pub use query::{path_segment, QueryString};
pub use reqwest_client::ReqwestApiClient;
