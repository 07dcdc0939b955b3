use std::io::Write;

use casts_l10n::LocalizationEntry;
use casts_l10n::strings::ENTRIES;
use clap::Args;

use crate::error::Result;
use crate::util::write_json;

#[derive(Debug, Clone, Default, Args)]
pub struct KeysArgs {
    /// Only list keys starting with this prefix.
    #[arg(long)]
    pub prefix: Option<String>,
}

pub fn matching_entries(args: &KeysArgs) -> Vec<&'static LocalizationEntry> {
    ENTRIES
        .iter()
        .filter(|entry| {
            args.prefix
                .as_deref()
                .is_none_or(|prefix| entry.key.starts_with(prefix))
        })
        .collect()
}

pub fn run_keys(args: KeysArgs, json: bool, out: &mut dyn Write) -> Result<()> {
    let entries = matching_entries(&args);
    if json {
        write_json(out, &entries)?;
    } else {
        for entry in entries {
            writeln!(out, "{}\t{}\t{}", entry.key, entry.arity, entry.fallback)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_filters_entries() {
        let args = KeysArgs {
            prefix: Some("plus_".into()),
        };
        let entries = matching_entries(&args);
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|entry| entry.key.starts_with("plus_")));
        assert!(entries.iter().any(|entry| entry.key == "plus_offer_badge"));
    }

    #[test]
    fn text_output_is_tab_separated() {
        let mut out = Vec::new();
        run_keys(
            KeysArgs {
                prefix: Some("app_version".into()),
            },
            false,
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "app_version\t2\tVersion %1$@ (%2$@)\n");
    }

    #[test]
    fn json_output_lists_every_entry() {
        let mut out = Vec::new();
        run_keys(KeysArgs::default(), true, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json.as_array().unwrap().len(), ENTRIES.len());
        assert_eq!(json[0]["table"], "Localizable");
    }
}
