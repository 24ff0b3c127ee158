pub mod honeymoon_fund_response;
pub mod registry;
