use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    pub code: &'static str,
}
