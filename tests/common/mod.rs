use std::io::Write;
use tempfile::NamedTempFile;

pub fn debt_book(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id,entity,balance,monthly_payment,interest_rate,status").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

pub fn action_stream(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "debt_id,action,monto,date,persona,metodo,nota").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}
