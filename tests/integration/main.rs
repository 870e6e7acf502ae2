mod app_flow;
mod helpers;
mod merge;
mod poll_client;
mod visibility;
