pub mod docstrings;
pub mod exceptions;
pub mod imports;
pub mod long_lines;
pub mod security;
pub mod whitespace;

use crate::core::Scope;

/// One category of transformation applied across its scope of files.
///
/// The transform is a pure text-to-text function; the runner owns all
/// file I/O and the changed/unchanged decision. Every transform must be
/// idempotent: applying it to its own output is a no-op.
pub struct Pass {
    pub name: &'static str,
    pub label: &'static str,
    pub scope: Scope,
    pub transform: fn(&str) -> String,
}

pub fn quality_passes() -> Vec<Pass> {
    vec![
        Pass {
            name: "whitespace",
            label: "Fixing whitespace issues",
            scope: Scope::Tree,
            transform: whitespace::apply,
        },
        Pass {
            name: "unused-imports",
            label: "Cleaning up imports",
            scope: Scope::Tree,
            transform: imports::apply,
        },
        Pass {
            name: "long-lines",
            label: "Adding line length warnings",
            scope: Scope::Tree,
            transform: long_lines::apply,
        },
        Pass {
            name: "exception-handling",
            label: "Improving exception handling",
            scope: Scope::Tree,
            transform: exceptions::apply,
        },
        Pass {
            name: "docstrings",
            label: "Adding docstring placeholders",
            scope: Scope::Tree,
            transform: docstrings::apply,
        },
    ]
}

pub fn security_passes() -> Vec<Pass> {
    vec![
        Pass {
            name: "pycrypto-migration",
            label: "Migrating deprecated PyCrypto imports",
            scope: Scope::Fixed(security::PYCRYPTO_FILES),
            transform: security::migrate_pycrypto,
        },
        Pass {
            name: "weak-hashing",
            label: "Hardening weak hash usage",
            scope: Scope::Fixed(security::WEAK_HASH_FILES),
            transform: security::harden_weak_hashes,
        },
        Pass {
            name: "temp-files",
            label: "Hardening temp file usage",
            scope: Scope::Fixed(security::TEMP_FILE_FILES),
            transform: security::harden_temp_files,
        },
        Pass {
            name: "subprocess",
            label: "Flagging subprocess usage for review",
            scope: Scope::Fixed(security::SUBPROCESS_FILES),
            transform: security::flag_subprocess_usage,
        },
        Pass {
            name: "weak-random",
            label: "Flagging weak random usage for review",
            scope: Scope::Fixed(security::WEAK_RANDOM_FILES),
            transform: security::flag_weak_random,
        },
    ]
}

/// The fixed pipeline order. Quality passes run before security passes;
/// within each group the declared order is the execution order. Every
/// pass re-reads files from disk, so later passes observe the on-disk
/// effects of earlier ones.
pub fn all_passes() -> Vec<Pass> {
    let mut passes = quality_passes();
    passes.extend(security_passes());
    passes
}
