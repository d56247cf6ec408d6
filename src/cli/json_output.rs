use serde::Serialize;

/// JSON response for `onepassword version --json`.
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: bool,
}

/// JSON response for `onepassword value|username|password --json`.
#[derive(Serialize)]
pub struct ValueResponse<'a> {
    pub vault: &'a str,
    pub item: &'a str,
    pub field: &'a str,
    pub value: &'a str,
}

/// JSON response for `onepassword uuid --json`.
#[derive(Serialize)]
pub struct UuidResponse<'a> {
    pub vault: &'a str,
    pub item: &'a str,
    pub id: &'a str,
}
