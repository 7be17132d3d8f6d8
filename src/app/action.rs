/// Side effects the event loop performs on behalf of the handler.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    FetchRemote { request_id: u64 },
    Quit,
}
