pub mod config;
pub mod logic;
pub mod mock_workflow;
pub mod router;
pub mod run_request;
pub mod run_workflow;
pub mod server;
