//! Test fixtures - reusable descriptor content.

/// Well-formed descriptor for `zot`
pub const ZOT_README: &str = r#"name        = "zot"
image       = "cgr.dev/chainguard/zot"
intro       = ""
body        = ""
description = ""
"#;

/// Descriptor with narrative content and a heredoc body
pub const NGINX_README: &str = r#"name        = "nginx"
image       = "cgr.dev/chainguard/nginx"
intro       = "Minimal nginx image."
body        = <<EOT
## Usage

docker run cgr.dev/chainguard/nginx
EOT
description = "nginx web server"
"#;

/// Descriptor with an unterminated string
pub const UNTERMINATED_README: &str = r#"name        = "zot
image       = "cgr.dev/chainguard/zot"
intro       = ""
body        = ""
description = ""
"#;
