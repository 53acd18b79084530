//! Loading city records from the world cities CSV

use crate::error::{CitySortResult, FileContext};
use crate::record::City;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Column holding the ASCII city name
const COL_CITY_ASCII: usize = 1;
const COL_LAT: usize = 2;
const COL_LNG: usize = 3;
const COL_COUNTRY: usize = 4;
const COL_POPULATION: usize = 9;
/// Rows shorter than this cannot reach the population column
const EXPECTED_MIN_COLUMNS: usize = 10;

/// Why a data row was left out of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Malformed,
    TooFewColumns,
    MissingPopulation,
    InvalidPopulation,
    MissingCoordinates,
    InvalidCoordinates,
}

/// Reads `worldcities.csv`-shaped files into [`City`] records
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every valid row, skipping the header and any row that fails the
    /// field contract.
    pub fn load(&self) -> CitySortResult<Vec<City>> {
        let name = self.path.display().to_string();
        let file = File::open(&self.path).with_file_context(&name)?;

        if file.metadata().with_file_context(&name)?.len() == 0 {
            log::warn!("CSV file '{name}' is empty or header could not be read");
            return Ok(Vec::new());
        }

        // SAFETY: the map is read-only and dropped before this function
        // returns; the file is not expected to change while it is parsed.
        let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
        let cities = parse_cities(&mmap[..]);

        log::info!("Successfully parsed {} cities from '{name}'", cities.len());
        Ok(cities)
    }
}

/// Parse CSV bytes (header included) into cities
pub fn parse_cities(data: &[u8]) -> Vec<City> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut cities = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // Data rows start on line 2, after the header.
        let line = row + 2;
        let parsed = match record {
            Ok(record) => parse_row(&record),
            Err(err) => {
                log::debug!("line {line}: {err}");
                Err(SkipReason::Malformed)
            }
        };

        match parsed {
            Ok(city) => cities.push(city),
            Err(reason) => log::debug!("skipping line {line}: {reason:?}"),
        }
    }

    cities
}

/// Convert one CSV record into a city
pub fn parse_row(record: &csv::StringRecord) -> Result<City, SkipReason> {
    if record.len() < EXPECTED_MIN_COLUMNS {
        return Err(SkipReason::TooFewColumns);
    }

    let population = record[COL_POPULATION].trim();
    if population.is_empty() {
        return Err(SkipReason::MissingPopulation);
    }
    let population = parse_population(population).ok_or(SkipReason::InvalidPopulation)?;

    let lat = record[COL_LAT].trim();
    let lng = record[COL_LNG].trim();
    if lat.is_empty() || lng.is_empty() {
        return Err(SkipReason::MissingCoordinates);
    }
    let lat = parse_coordinate(lat).ok_or(SkipReason::InvalidCoordinates)?;
    let lng = parse_coordinate(lng).ok_or(SkipReason::InvalidCoordinates)?;

    Ok(City {
        name: record[COL_CITY_ASCII].to_string(),
        country: record[COL_COUNTRY].to_string(),
        lat,
        lng,
        population,
    })
}

/// Parse the leading optionally signed decimal integer of `s`.
///
/// Anything after the digits is ignored, so `"1000.0"` reads as 1000.
/// Returns `None` without digits or on overflow.
pub fn parse_population(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for &b in &bytes[start..start + digits] {
        let digit = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }

    Some(value)
}

/// Parse a latitude or longitude; only finite values are accepted
pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "city,city_ascii,lat,lng,country,iso2,iso3,admin_name,capital,population,id\n";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    fn load(content: &str) -> Vec<City> {
        let file = write_csv(content);
        DatasetLoader::new(file.path())
            .load()
            .expect("Failed to load test dataset")
    }

    #[test]
    fn test_load_valid_data() {
        let cities = load(&format!(
            "{HEADER}\
             Tokyo,Tokyo,35.6897,139.6922,Japan,JP,JPN,Tokyo,primary,37435191,1392685764\n\
             Delhi,Delhi,28.6139,77.2090,India,IN,IND,Delhi,admin,29399141,1356872604\n"
        ));

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Tokyo");
        assert_eq!(cities[0].country, "Japan");
        assert_eq!(cities[0].lat, 35.6897);
        assert_eq!(cities[0].lng, 139.6922);
        assert_eq!(cities[0].population, 37435191);
        assert_eq!(cities[1].name, "Delhi");
        assert_eq!(cities[1].country, "India");
        assert_eq!(cities[1].population, 29399141);
    }

    #[test]
    fn test_quoted_fields() {
        let cities = load(&format!(
            "{HEADER}\
             \"Washington, D.C.\",\"Washington, D.C.\",38.9047,-77.0163,\"United States\",US,USA,\"District of Columbia\",primary,5379184,1\n\
             \"Say \"\"Hi\"\"\",\"Say \"\"Hi\"\"\",1.0,2.0,Nowhere,NW,NWH,,,10,2\n"
        ));

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Washington, D.C.");
        assert_eq!(cities[0].country, "United States");
        assert_eq!(cities[1].name, "Say \"Hi\"");
    }

    #[test]
    fn test_skip_row_missing_population() {
        let cities = load(&format!(
            "{HEADER}\
             ValidCity,ValidCity,10.0,20.0,CountryA,CA,CAA,,,1000,1\n\
             NoPopCity,NoPopCity,12.0,22.0,CountryB,CB,CBB,,,,2\n"
        ));
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "ValidCity");
    }

    #[test]
    fn test_skip_row_invalid_population() {
        let cities = load(&format!(
            "{HEADER}\
             ValidCity,ValidCity,10.0,20.0,CountryA,CA,CAA,,,1000,1\n\
             BadPopCity,BadPopCity,12.0,22.0,CountryB,CB,CBB,,,NOT_A_NUMBER,2\n"
        ));
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "ValidCity");
    }

    #[test]
    fn test_skip_row_insufficient_columns() {
        let cities = load(&format!(
            "{HEADER}\
             ValidCity,ValidCity,10.0,20.0,CountryA,CA,CAA,,1000,1\n\
             ShortRow,ShortRow,5.0,5.0,CountryC\n"
        ));
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "ValidCity");
        // Ten columns reach the population column, which here holds the id.
        assert_eq!(cities[0].population, 1);
    }

    #[test]
    fn test_skip_row_invalid_coordinates() {
        let cities = load(&format!(
            "{HEADER}\
             BadLat,BadLat,NOT_LAT,20.0,CountryD,CD,CDD,,,100,3\n\
             BadLng,BadLng,10.0,NOT_LNG,CountryE,CE,CEE,,,200,4\n\
             NoLat,NoLat,,20.0,CountryG,CG,CGG,,,250,6\n\
             InfLat,InfLat,inf,20.0,CountryH,CH,CHH,,,275,7\n\
             Valid,Valid,30.0,40.0,CountryF,CF,CFF,,,300,5\n"
        ));
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Valid");
    }

    #[test]
    fn test_empty_file() {
        assert!(load("").is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(load(HEADER).is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = DatasetLoader::new("definitely/not/here.csv").load();
        assert!(matches!(
            result,
            Err(crate::error::CitySortError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_population() {
        assert_eq!(parse_population("1000"), Some(1000));
        assert_eq!(parse_population("1000.0"), Some(1000));
        assert_eq!(parse_population("-42"), Some(-42));
        assert_eq!(parse_population("+7"), Some(7));
        assert_eq!(parse_population("abc"), None);
        assert_eq!(parse_population("-"), None);
        assert_eq!(parse_population("99999999999999999999"), None);
        assert_eq!(parse_population("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("-77.0163"), Some(-77.0163));
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("north"), None);
    }
}
