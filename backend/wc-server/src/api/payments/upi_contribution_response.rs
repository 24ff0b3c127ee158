use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpiContributionResponse {
    pub success: bool,
    pub contribution_id: String,
    pub message: String,
}
