// crates/provincedb-core/src/model/load.rs
use super::flat::ProvinceDb;
use bincode::Options;

/// Upper bound for a decoded snapshot, guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

/// The bincode configuration shared by snapshot readers and writers.
pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl ProvinceDb {
    /// Reconstructs the database (records and indices) from an uncompressed
    /// bincode snapshot, as written by [`ProvinceDb::save_as`] with
    /// [`CompressionMode::None`](crate::loader::CompressionMode::None).
    ///
    /// The indices are taken from the snapshot as-is rather than rebuilt.
    pub fn from_bincode_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        snapshot_options().deserialize(data)
    }

    /// Encodes the database as an uncompressed bincode snapshot.
    pub fn to_bincode_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        snapshot_options().serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Locale, Province, ProvinceDb};
    use crate::traits::ProvinceSearch;

    #[test]
    fn snapshot_keeps_records_and_indices() {
        let db = ProvinceDb::new(vec![Province {
            zip: 83150,
            subdistrict: "Patong".into(),
            subdistrict_th: "ป่าตอง".into(),
            district: "Kathu".into(),
            district_th: "กะทู้".into(),
            district_zip: 83120,
            city: "Phuket".into(),
            city_th: "ภูเก็ต".into(),
        }]);

        let bytes = db.to_bincode_bytes().unwrap();
        let restored = ProvinceDb::from_bincode_bytes(&bytes).unwrap();

        assert_eq!(restored.provinces(), db.provinces());
        assert_eq!(restored.provinces_by_district("kathu", Locale::En).len(), 1);
        assert_eq!(restored.zips(), [83150]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ProvinceDb::from_bincode_bytes(&[0xff; 7]).is_err());
    }
}
