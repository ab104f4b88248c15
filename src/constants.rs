pub mod limits {

    /// Housekeeping entries shown by `housekeeping list`.
    pub const HOUSEKEEPING_LIST_LIMIT: usize = 10;

    /// Error body characters kept when a completion request fails.
    pub const ERROR_BODY_PREVIEW: usize = 500;
}

pub mod http {

    pub const USER_AGENT: &str = "Concierge/1.0";
}
