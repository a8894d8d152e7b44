//! Roster file output.

use std::fs;
use std::path::Path;

use crate::error::GenError;
use crate::generator::{GeneratedMember, render_roster};

/// Members generated when no count is given.
pub const DEFAULT_COUNT: usize = 185;

/// Roster path used when no output is given.
pub const DEFAULT_OUTPUT: &str = "test_data/pgdata.txt";

/// Write members to `path`, creating the parent directory if needed.
pub fn write_roster(path: &Path, members: &[GeneratedMember]) -> Result<(), GenError> {
    let write_err = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, render_roster(members)).map_err(write_err)
}
