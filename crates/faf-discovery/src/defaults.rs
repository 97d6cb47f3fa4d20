//! Built-in ignore rules, used when a project has no usable `.fafignore`.

/// Patterns applied when no `.fafignore` overrides them.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // Dependencies
    "node_modules/",
    "vendor/",
    "bower_components/",
    "__pycache__/",
    "*.pyc",
    ".pytest_cache/",
    "venv/",
    ".venv/",
    "env/",
    ".env/",
    // Build outputs
    "dist/",
    "build/",
    "out/",
    ".next/",
    ".nuxt/",
    ".svelte-kit/",
    "target/",
    "bin/",
    "obj/",
    // Version control
    ".git/",
    ".svn/",
    ".hg/",
    // Editors
    ".vscode/",
    ".idea/",
    "*.swp",
    "*.swo",
    "*~",
    // OS files
    ".DS_Store",
    "Thumbs.db",
    // Logs
    "*.log",
    "logs/",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    // Secrets
    ".env",
    ".env.*",
    "*.key",
    "*.pem",
    "*.p12",
    "credentials.json",
    "secrets/",
    // Coverage
    "coverage/",
    ".nyc_output/",
    "htmlcov/",
    // Media and archives
    "*.jpg",
    "*.jpeg",
    "*.png",
    "*.gif",
    "*.ico",
    "*.svg",
    "*.mp4",
    "*.mp3",
    "*.wav",
    "*.pdf",
    "*.zip",
    "*.tar.gz",
    "*.rar",
    // Lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "Pipfile.lock",
    // Misc
    ".cache/",
    "tmp/",
    "temp/",
];

/// Starter `.fafignore` written by
/// [`write_default_ignore_file`](crate::rules_file::write_default_ignore_file).
pub const DEFAULT_IGNORE_TEMPLATE: &str = "\
# .fafignore - Files to exclude from FAF context
# Similar to .gitignore syntax

# Dependencies
node_modules/
__pycache__/
venv/
.venv/

# Build outputs
dist/
build/
.next/

# Version control
.git/

# IDE
.vscode/
.idea/

# Secrets
.env
.env.*
*.key
*.pem

# Large files
*.jpg
*.png
*.mp4
*.pdf
*.zip

# Lock files
package-lock.json
yarn.lock
";

/// Files and directories whose presence marks a project root, in lookup order.
pub const PROJECT_MARKERS: &[&str] = &[
    "package.json",
    "pyproject.toml",
    "setup.py",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
    "build.gradle",
    "Gemfile",
    ".git",
    "project.faf",
    ".faf",
];
