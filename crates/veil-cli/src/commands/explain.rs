use anyhow::Result;

pub fn handle(viewer: &str, subject: &str) -> Result<()> {
    let level = veil_policy::resolve(viewer, subject);
    let fields: Vec<&str> = level.fields().iter().map(|field| field.label()).collect();

    println!("{} viewing {} -> {:?}", viewer, subject, level);
    println!("  Fields: {}", fields.join(", "));

    Ok(())
}
