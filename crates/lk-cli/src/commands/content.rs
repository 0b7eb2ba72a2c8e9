use lk_core::ContentTable;

pub fn run() -> Result<(), String> {
    let json = ContentTable::builtin()
        .and_then(|c| c.to_json())
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
