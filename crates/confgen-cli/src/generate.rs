use anyhow::Result;
use std::path::Path;

use confgen_core::subst;
use confgen_core::table::Table;
use confgen_core::template::Template;
use confgen_core::writer;

use crate::output;

/// Run the batch generation loop: one output file per table row.
///
/// Template and table problems abort the run before anything is written.
/// Per-row problems (empty filename field, a failed write) are reported and
/// the remaining rows still get their files; the process exits 0 either way.
pub fn run(
    template_path: &Path,
    table_path: &Path,
    delimiter: char,
    out_dir: &Path,
    dry_run: bool,
) -> Result<()> {
    anyhow::ensure!(
        delimiter.is_ascii(),
        "delimiter must be a single ASCII character, got '{delimiter}'"
    );

    output::print_reading("template", template_path);
    let template = Template::load(template_path)?;

    output::print_reading("table", table_path);
    let table = Table::load(table_path, delimiter as u8)?;

    output::print_key_value("Rows", &table.records().len().to_string());
    output::print_key_value("Filename column", table.filename_column());
    output::print_key_value("Variable columns", &table.variable_columns().join(", "));
    println!();

    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for (idx, record) in table.records().iter().enumerate() {
        // Physical file line: the header is row 1, the first data row is row 2.
        let row = idx + 2;

        let Some(filename) = writer::output_filename(table.filename_value(record)) else {
            output::print_warning(&format!("row {row}: empty filename, skipping"));
            skipped += 1;
            continue;
        };
        let path = out_dir.join(&filename);

        let vars = table.variable_pairs(record);
        let content = subst::substitute(template.text(), &vars);

        if dry_run {
            output::print_would_create(&path);
            continue;
        }

        match writer::write_output(&path, &content) {
            Ok(()) => {
                output::print_created(&path);
                written += 1;
            }
            Err(e) => {
                output::print_error(&format!("row {row}: {e}"));
                failed += 1;
            }
        }
    }

    let total = table.records().len();
    println!();
    if dry_run {
        output::print_success(&format!(
            "Dry run: {} of {total} row(s) would generate files",
            total - skipped
        ));
    } else {
        output::print_success(&format!("Completed: generated {written} of {total} row(s)"));
        if skipped > 0 {
            output::print_warning(&format!("{skipped} row(s) skipped (empty filename)"));
        }
        if failed > 0 {
            output::print_warning(&format!("{failed} write(s) failed"));
        }
    }

    Ok(())
}
