use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const REQUEST_HEADERS: [&str; 7] = [
    "customer_email",
    "amount",
    "reference",
    "callback_url",
    "auth_credential",
    "currency",
    "plan",
];

pub fn write_requests_csv(path: &Path, rows: &[[&str; 7]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(REQUEST_HEADERS)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
