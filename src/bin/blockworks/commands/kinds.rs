//! `blockworks kinds` command

use anyhow::Result;

use blockworks::core::ShapeKind;
use blockworks::util::Shell;

pub fn execute(shell: &Shell) -> Result<()> {
    if shell.is_json() {
        for kind in ShapeKind::ALL {
            shell.json_event(&serde_json::json!({
                "reason": "kind",
                "token": kind.token(),
                "kind": kind,
                "fields": kind.fields(),
            }));
        }
        return Ok(());
    }

    for kind in ShapeKind::ALL {
        let fields = kind
            .fields()
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}  {:<9} {}", kind.token(), kind.name(), fields);
    }

    Ok(())
}
