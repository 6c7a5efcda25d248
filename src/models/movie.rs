use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Runtime in minutes; the backend may send fractional values.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Payload for create/update; the backend assigns the id.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MoviePageResponse {
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Write-queue acknowledgement text from the backend, shown verbatim.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to movie writes; the backend queues the write and
/// acknowledges with a message the UI displays as-is.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MovieWriteResponse {
    #[serde(default)]
    pub message: Option<String>,
}
