//! Expansion of a target table into makefile rules.

use crate::config::GeneratorConfig;
use crate::makefile::{Makefile, Rule};
use crate::target::{Target, TargetTable};

pub const MAIN_RULE: &str = "main";
pub const LOCAL_RULE: &str = "local";
pub const CLEAN_RULE: &str = "clean";

/// Commands that build one target, archive it, and remove the raw binary
/// so the next target's build starts from an empty output path.
pub fn build_commands(app: &str, out_dir: &str, target: Target<'_>) -> [String; 3] {
    let bin = format!("{out_dir}/{app}");
    [
        format!(
            "GOOS={} GOARCH={} go build -o {bin} .",
            target.platform, target.arch
        ),
        format!("zip -r {bin}-{target}.zip {bin}"),
        format!("rm -rf {bin}"),
    ]
}

/// Archive produced for `target`, relative to the makefile.
pub fn archive_path(app: &str, out_dir: &str, target: Target<'_>) -> String {
    format!("{out_dir}/{app}-{target}.zip")
}

fn table_rule(name: &str, app: &str, out_dir: &str, table: &TargetTable) -> Rule {
    Rule::new(name).dep(CLEAN_RULE).commands(
        table
            .targets()
            .flat_map(|target| build_commands(app, out_dir, target)),
    )
}

/// Builds the `main`, `local` and `clean` rules, in that order.
pub fn generate_makefile(config: &GeneratorConfig) -> Makefile {
    let app = config.app.as_str();
    let out_dir = config.out_dir.as_str();

    let mut makefile = Makefile::new();
    makefile.push(table_rule(MAIN_RULE, app, out_dir, &config.targets));
    makefile.push(table_rule(LOCAL_RULE, app, out_dir, &config.local));
    makefile.push(
        Rule::new(CLEAN_RULE)
            .command(format!("rm -rf {out_dir}"))
            .command(format!("mkdir -p {out_dir}")),
    );

    tracing::debug!(
        main = config.targets.targets().count(),
        local = config.local.targets().count(),
        "expanded target tables"
    );
    makefile
}
