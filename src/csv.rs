use serde::de::DeserializeOwned;

/// Deserializes every record of a CSV (with header) into `D`.
/// # Error
/// Errors if any record cannot be deserialized
pub fn deserialize<D: DeserializeOwned>(data: &[u8]) -> Result<Vec<D>, csv::Error> {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize().collect()
}

/// Writes `header` followed by `rows` as CSV
pub fn write<I, R>(
    header: impl IntoIterator<Item = String>,
    rows: I,
) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
