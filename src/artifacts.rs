//! Static configuration and build-task artifacts.
//!
//! Artifacts are fixed text blobs written unconditionally at the working
//! root. Unlike pass output they are never content-compared against what
//! is already on disk, and they do not take part in the rewritten file
//! accounting.

use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct ArtifactSpec {
    pub path: &'static str,
    pub content: &'static str,
}

const PYPROJECT_TOML: &str = r#"[tool.black]
line-length = 100
target-version = ['py39']
include = '\.pyi?$'
extend-exclude = '''
/(
  # directories
  \.eggs
  | \.git
  | \.mypy_cache
  | \.pytest_cache
  | \.venv
  | build
  | dist
  | __pycache__
)/
'''

[tool.isort]
profile = "black"
line_length = 100
multi_line_output = 3
include_trailing_comma = true
force_grid_wrap = 0
use_parentheses = true
ensure_newline_before_comments = true

[tool.pylint.messages_control]
disable = [
    "C0114",  # missing-module-docstring
    "C0115",  # missing-class-docstring
    "C0116",  # missing-function-docstring
]

[tool.pylint.format]
max-line-length = 100
"#;

const FLAKE8_CONFIG: &str = r#"[flake8]
max-line-length = 100
extend-ignore =
    E203,  # whitespace before ':'
    E501,  # line too long (handled by black)
    W503,  # line break before binary operator
exclude =
    .git,
    __pycache__,
    .pytest_cache,
    .mypy_cache,
    build,
    dist,
    *.egg-info
per-file-ignores =
    __init__.py:F401
"#;

const MAKEFILE: &str = r#"# Development Makefile

.PHONY: help install test lint format security quality fix clean setup-dev

help:  ## Show this help message
	@echo "Available commands:"
	@grep -E '^[a-zA-Z_-]+:.*?## .*$$' $(MAKEFILE_LIST) | sort | awk 'BEGIN {FS = ":.*?## "}; {printf "  \033[36m%-15s\033[0m %s\n", $$1, $$2}'

install:  ## Install dependencies
	pip install -r requirements.txt
	pip install -r requirements-dev.txt

test:  ## Run tests
	python -m pytest tests/ -v

lint:  ## Run linting tools
	flake8 .
	pylint .

format:  ## Format code
	black .
	isort .

security:  ## Run security scans
	bandit -r . -f json -o bandit-report.json
	safety check

quality:  ## Run all quality checks
	make lint
	make security

fix:  ## Apply automated fixes
	codemend fix

clean:  ## Clean up generated files
	find . -type f -name "*.pyc" -delete
	find . -type d -name "__pycache__" -delete
	rm -f bandit-report.json safety-report.json
	rm -rf .pytest_cache .mypy_cache

setup-dev:  ## Setup development environment
	pip install black flake8 isort pylint bandit safety pytest
	pre-commit install
"#;

const SECURITY_CONFIG: &str = r#"# Security Configuration

[cryptography]
# Use modern cryptography library instead of PyCrypto
default_cipher = AES-GCM
key_derivation = PBKDF2
random_source = secrets

[file_operations]
# Secure temporary file handling
temp_dir_mode = 0o700
file_mode = 0o600
use_tempfile_module = true

[subprocess]
# Secure subprocess execution
use_full_paths = true
validate_executables = true
timeout_default = 30

[logging]
# Security logging
log_level = INFO
log_security_events = true
sanitize_logs = true

[network]
# Network security settings
verify_ssl = true
timeout = 30
max_redirects = 3
"#;

pub const ARTIFACTS: &[ArtifactSpec] = &[
    ArtifactSpec {
        path: "pyproject.toml",
        content: PYPROJECT_TOML,
    },
    ArtifactSpec {
        path: ".flake8",
        content: FLAKE8_CONFIG,
    },
    ArtifactSpec {
        path: "Makefile",
        content: MAKEFILE,
    },
    ArtifactSpec {
        path: "security_config.ini",
        content: SECURITY_CONFIG,
    },
];

/// Write every artifact under the root, overwriting whatever is there.
pub fn write_artifacts(root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ARTIFACTS.len());
    for spec in ARTIFACTS {
        let path = root.join(spec.path);
        io::write_file(&path, spec.content)?;
        written.push(path);
    }
    Ok(written)
}
