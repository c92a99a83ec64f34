//! dpkg database source

use std::process::Command;

use crate::error::{Result, source::listing_failed};
use crate::parser::arch_is_valid;

use super::PackageSource;

/// Output format: package, architecture, and installation status
const FORMAT: &str = "${Package}\t${Architecture}\t${db:Status-Status}\n";

/// Name patterns matching versioned kernel packages only, not meta packages
const PATTERNS: [&str; 4] = [
    "linux-headers-[0-9]*",
    "linux-image-[0-9]*",
    "linux-modules-[0-9]*",
    "linux-modules-extra-[0-9]*",
];

/// Lists installed kernel packages with `dpkg-query`
#[derive(Debug, Clone)]
pub struct DpkgQuery {
    program: String,
}

impl DpkgQuery {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} -W -f '{}' {}", self.program, FORMAT.escape_default(), PATTERNS.join(" "))
    }
}

impl Default for DpkgQuery {
    fn default() -> Self {
        Self::new("dpkg-query")
    }
}

impl PackageSource for DpkgQuery {
    fn describe(&self) -> String {
        self.command_line()
    }

    fn listing(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-W")
            .arg(format!("-f={FORMAT}"))
            .args(PATTERNS)
            .output()
            .map_err(|e| listing_failed(&self.program, e.to_string()))?;

        // dpkg-query exits with 1 when some pattern matched nothing
        let accepted = output.status.success() || output.status.code() == Some(1);
        if !accepted {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(listing_failed(
                self.command_line(),
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(installed_names(&stdout))
    }
}

/// Names of installed packages with a supported architecture
///
/// Rows are `package<TAB>architecture<TAB>status`. Rows for packages that are
/// only known to dpkg (removed, config files left) are dropped.
pub fn installed_names(rows: &str) -> String {
    let mut names = String::new();
    for row in rows.lines() {
        let mut columns = row.split('\t');
        let (Some(package), Some(arch), Some(status)) =
            (columns.next(), columns.next(), columns.next())
        else {
            continue;
        };
        if status.trim() == "installed" && arch_is_valid(arch.trim()) {
            names.push_str(package.trim());
            names.push('\n');
        }
    }
    names
}
