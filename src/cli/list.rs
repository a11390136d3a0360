use crate::error::PlaypageError;
use crate::scripts;

pub fn handle_list() -> Result<(), PlaypageError> {
    for script in scripts::all() {
        println!("{:<10} {}", script.name(), script.about());
    }
    Ok(())
}
