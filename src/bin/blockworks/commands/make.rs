//! `blockworks make` command

use anyhow::Result;

use crate::cli::MakeArgs;
use blockworks::core::{Field, RawParams, ShapeKind};
use blockworks::ops::make_shape;
use blockworks::util::Shell;

pub fn execute(args: MakeArgs, shell: &Shell) -> Result<()> {
    let supplied = [
        (Field::Radius, "--radius", args.radius),
        (Field::SideLength, "--side-length", args.side_length),
        (Field::Base, "--base", args.base),
        (Field::Height, "--height", args.height),
    ];

    let kind = ShapeKind::parse_token(&args.kind).ok();
    let mut params = RawParams::new();

    for (field, flag, value) in supplied {
        let Some(value) = value else { continue };

        if let Some(kind) = kind {
            if !kind.fields().contains(&field) {
                shell.warn(format!(
                    "ignoring `{}` for {} blocks (expected {})",
                    flag,
                    kind,
                    field_flags(kind)
                ));
            }
        }
        params.insert(field, value);
    }

    let shape = make_shape(&args.kind, &params)?;
    shell.shape(&shape);

    Ok(())
}

fn field_flags(kind: ShapeKind) -> String {
    kind.fields()
        .iter()
        .map(|field| match field {
            Field::Radius => "--radius",
            Field::SideLength => "--side-length",
            Field::Base => "--base",
            Field::Height => "--height",
        })
        .collect::<Vec<_>>()
        .join(", ")
}
