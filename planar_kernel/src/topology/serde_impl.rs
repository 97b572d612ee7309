use super::Polygon;
use crate::{core::traits::Real, shape::EdgeShape};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeSeq,
};

/// Serialized as an array of faces, each face an array of its edge shapes.
impl<T> Serialize for Polygon<T>
where
    T: Real + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.face_count()))?;
        for face in self.faces() {
            seq.serialize_element(&self.face_shapes(face))?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Polygon<T>
where
    T: Real + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let loops = Vec::<Vec<EdgeShape<T>>>::deserialize(deserializer)?;
        Polygon::from_shape_loops(&loops).map_err(D::Error::custom)
    }
}
