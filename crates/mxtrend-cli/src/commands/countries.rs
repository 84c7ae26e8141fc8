use std::io::Write;

use anyhow::{bail, Result};
use mxtrend_core::countries::{country_name, COUNTRY_GUIDE};
use tabwriter::TabWriter;

/// Print the country guide, or only the requested codes.
pub fn handle<W: Write>(codes: &[String], out: &mut W) -> Result<()> {
    let rows: Vec<(String, &str)> = if codes.is_empty() {
        COUNTRY_GUIDE
            .iter()
            .map(|c| (c.code.to_string(), c.name))
            .collect()
    } else {
        let mut rows = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.trim().to_ascii_uppercase();
            let Some(name) = country_name(&code) else {
                bail!("country code '{code}' is not in the country guide");
            };
            rows.push((code, name));
        }
        rows
    };

    let mut writer = TabWriter::new(out);
    writeln!(writer, "CÓDIGO\tPAÍS")?;
    for (code, name) in rows {
        writeln!(writer, "{code}\t{name}")?;
    }
    writer.flush()?;
    Ok(())
}
