use serde::Deserialize;

// --- Data Structures for parsing Yandex Geocoder responses ---

#[derive(Deserialize)]
pub struct GeocodeResponse {
    pub response: ResponseBody,
}
#[derive(Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    pub collection: GeoObjectCollection,
}
#[derive(Deserialize)]
pub struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    pub feature_member: Vec<FeatureMember>,
}
#[derive(Deserialize)]
pub struct FeatureMember {
    #[serde(rename = "GeoObject")]
    pub geo_object: GeoObject,
}
#[derive(Deserialize)]
pub struct GeoObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Point")]
    pub point: GeoPoint,
}
#[derive(Deserialize)]
pub struct GeoPoint {
    /// `"<longitude> <latitude>"`
    pub pos: String,
}
