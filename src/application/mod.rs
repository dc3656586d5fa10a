/// Module containing the client façade and RPC dispatch
pub mod client;
/// Module containing the response envelope validator
pub mod envelope;
/// Module containing domain records and payload mappers
pub mod models;
/// Module containing the remote operation enumeration
pub mod operation;
