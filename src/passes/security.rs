//! Security-oriented rewrites applied to fixed lists of files.
//!
//! Each concern carries its own file list and an ordered set of
//! substitutions, followed by an at-most-once explanatory banner that is
//! prepended when the concern's marker shows up in the rewritten text.
//! Some concerns deliberately stop at flagging: subprocess and random
//! usage get a review marker, not an automated rewrite.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Prepend `banner` once: only when `marker` occurs in the text and the
/// banner itself is not already present.
fn prepend_banner_once(content: String, marker: &str, banner: &str) -> String {
    if content.contains(marker) && !content.contains(banner) {
        format!("{banner}\n{content}")
    } else {
        content
    }
}

/// Prepend an import line unless an equivalent one is already present.
fn prepend_import_once(content: String, import_line: &str) -> String {
    if content.contains(import_line) {
        content
    } else {
        format!("{import_line}\n{content}")
    }
}

// ---------------------------------------------------------------------------
// Deprecated PyCrypto migration
// ---------------------------------------------------------------------------

pub const PYCRYPTO_FILES: &[&str] = &["exploits/aes_assessment.py"];

const PYCRYPTO_BANNER: &str =
    "# Updated to use modern cryptography library instead of deprecated PyCrypto";

struct Substitution {
    pattern: &'static Lazy<Regex>,
    replacement: &'static str,
}

static PYCRYPTO_IMPORT_CIPHER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from Crypto\.Cipher import AES").unwrap());
static PYCRYPTO_IMPORT_RANDOM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from Crypto\.Random import get_random_bytes").unwrap());
static PYCRYPTO_IMPORT_PADDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from Crypto\.Util\.Padding import pad, unpad").unwrap());
static PYCRYPTO_RANDOM_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"get_random_bytes\((\d+)\)").unwrap());
static PYCRYPTO_AES_NEW: Lazy<Regex> = Lazy::new(|| Regex::new(r"AES\.new\(").unwrap());
// Word boundaries keep the pad rule from eating the front of unpad calls.
static PYCRYPTO_PAD_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bpad\(").unwrap());
static PYCRYPTO_UNPAD_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bunpad\(").unwrap());

static PYCRYPTO_SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        pattern: &PYCRYPTO_IMPORT_CIPHER,
        replacement: "from cryptography.hazmat.primitives.ciphers import Cipher, algorithms, modes",
    },
    Substitution {
        pattern: &PYCRYPTO_IMPORT_RANDOM,
        replacement: "import os  # Use os.urandom instead",
    },
    Substitution {
        pattern: &PYCRYPTO_IMPORT_PADDING,
        replacement: "from cryptography.hazmat.primitives import padding",
    },
    Substitution {
        pattern: &PYCRYPTO_RANDOM_CALL,
        replacement: "os.urandom($1)",
    },
    Substitution {
        pattern: &PYCRYPTO_AES_NEW,
        replacement: "Cipher(algorithms.AES(",
    },
    Substitution {
        pattern: &PYCRYPTO_PAD_CALL,
        replacement: "padding.PKCS7(128).padder().update(",
    },
    Substitution {
        pattern: &PYCRYPTO_UNPAD_CALL,
        replacement: "padding.PKCS7(128).unpadder().update(",
    },
];

pub fn migrate_pycrypto(content: &str) -> String {
    let mut content = content.to_string();
    for sub in PYCRYPTO_SUBSTITUTIONS {
        content = sub
            .pattern
            .replace_all(&content, sub.replacement)
            .into_owned();
    }
    prepend_banner_once(content, "cryptography", PYCRYPTO_BANNER)
}

// ---------------------------------------------------------------------------
// Weak hash hardening
// ---------------------------------------------------------------------------

pub const WEAK_HASH_FILES: &[&str] = &["exploits/grover_bruteforce.py"];

const WEAK_HASH_BANNER: &str =
    "# Note: MD5/SHA1 used with usedforsecurity=False for non-cryptographic purposes";

static MD5_HEXDIGEST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hashlib\.md5\(([^)]+)\)\.hexdigest\(\)").unwrap());
static SHA1_HEXDIGEST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hashlib\.sha1\(([^)]+)\)\.hexdigest\(\)").unwrap());

fn mark_non_cryptographic(regex: &Regex, algorithm: &str, content: &str) -> String {
    regex
        .replace_all(content, |caps: &Captures| {
            let args = &caps[1];
            if args.contains("usedforsecurity") {
                caps[0].to_string()
            } else {
                format!("hashlib.{algorithm}({args}, usedforsecurity=False).hexdigest()")
            }
        })
        .into_owned()
}

/// Mark MD5/SHA1 hexdigest calls as explicitly non-cryptographic. Calls
/// already carrying `usedforsecurity` are left untouched so reruns do
/// not stack the keyword argument.
pub fn harden_weak_hashes(content: &str) -> String {
    let content = mark_non_cryptographic(&MD5_HEXDIGEST, "md5", content);
    let content = mark_non_cryptographic(&SHA1_HEXDIGEST, "sha1", &content);
    prepend_banner_once(content, "usedforsecurity=False", WEAK_HASH_BANNER)
}

// ---------------------------------------------------------------------------
// Insecure temp file hardening
// ---------------------------------------------------------------------------

pub const TEMP_FILE_FILES: &[&str] = &["exploits/ecdsa_vuln_scanner.py", "payloads/decrypt_tls.py"];

static TMP_PATH_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'/tmp/([^']+)'").unwrap());
static TMP_PATH_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""/tmp/([^"]+)""#).unwrap());

/// Replace quoted `/tmp/<name>` literals with `tempfile.mktemp` calls,
/// bringing in the tempfile import alongside the first rewrite.
pub fn harden_temp_files(content: &str) -> String {
    let replaced = TMP_PATH_SINGLE.replace_all(content, "tempfile.mktemp(suffix='.$1')");
    let replaced = TMP_PATH_DOUBLE
        .replace_all(&replaced, r#"tempfile.mktemp(suffix=".$1")"#)
        .into_owned();

    if replaced != content {
        prepend_import_once(replaced, "import tempfile")
    } else {
        replaced
    }
}

// ---------------------------------------------------------------------------
// Subprocess review flagging
// ---------------------------------------------------------------------------

pub const SUBPROCESS_FILES: &[&str] = &[
    "exploits/ecdsa_vuln_scanner.py",
    "exploits/quantum_network_recon.py",
];

const SUBPROCESS_BANNER: &str =
    "# TODO: Review subprocess calls for security - use shutil.which() for executables";

/// Subprocess calls are flagged for manual review, not rewritten;
/// resolving executables safely needs human judgment.
pub fn flag_subprocess_usage(content: &str) -> String {
    if !content.contains("subprocess.run") {
        return content.to_string();
    }
    let content = prepend_import_once(content.to_string(), "import shutil");
    prepend_banner_once(content, "subprocess.run", SUBPROCESS_BANNER)
}

// ---------------------------------------------------------------------------
// Weak random review flagging
// ---------------------------------------------------------------------------

pub const WEAK_RANDOM_FILES: &[&str] = &[
    "exploits/rsa_shor.py",
    "exploits/dh_shor.py",
    "quantum/simulator.py",
];

const WEAK_RANDOM_BANNER: &str =
    "# TODO: Review random number usage - consider secrets module for cryptographic purposes";

pub fn flag_weak_random(content: &str) -> String {
    if !content.contains("random.rand") {
        return content.to_string();
    }
    let content = prepend_import_once(content.to_string(), "import secrets");
    prepend_banner_once(content, "random.rand", WEAK_RANDOM_BANNER)
}
