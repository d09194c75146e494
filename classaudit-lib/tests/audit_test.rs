use classaudit_lib::{correlate, run_audit, AuditConfig, AuditError, ClassUsage, StylesheetMatch};
use classaudit_lib::source::FsSource;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Lays out `<project>/html/...` documents and `<project>/css/...` stylesheets.
fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir should create");
    let root = fs::canonicalize(dir.path()).expect("tempdir should canonicalize");
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("mkdir should succeed");
        }
        fs::write(full, content).expect("write should succeed");
    }
    (dir, root)
}

fn usage(token: &str, inline: &[&str], files: &[&Path], matches: &[(&Path, &str)]) -> ClassUsage {
    ClassUsage {
        token: token.to_string(),
        inline_styles: inline.iter().map(|s| s.to_string()).collect(),
        files: files.iter().map(|p| p.to_path_buf()).collect(),
        stylesheet_matches: matches
            .iter()
            .map(|(path, body)| StylesheetMatch {
                stylesheet: path.to_path_buf(),
                rule_body: body.to_string(),
            })
            .collect(),
    }
}

#[test]
fn audits_a_small_site_end_to_end() {
    let (_dir, root) = create_project(&[
        (
            "html/index.html",
            r#"<!DOCTYPE html>
<html>
<head>
  <link rel="stylesheet" href="/css/main.css">
  <link rel="stylesheet" href="/css/missing.css">
</head>
<body>
  <div class="box" style="color:red"><span class="box"></span></div>
  <nav class="menu wide">Menu</nav>
</body>
</html>"#,
        ),
        (
            "html/pages/about.php",
            r#"<?php include 'header.php'; ?>
<link rel="stylesheet" href="/css/main.css">
<link rel="stylesheet" href="/css/extra.css">
<div class="box" style="color:blue"></div>
<section class="wide" style="padding: 1em">
  <p class="lead">About us
</section>"#,
        ),
        ("html/blank.html", "   \n"),
        ("html/readme.txt", r#"<div class="ignored"></div>"#),
        (
            "css/main.css",
            ".box { margin: 0; }\n#header { height: 10px; }\n.menu{display:flex}\n",
        ),
        ("css/extra.css", ".wide { width: 100%; }\n.box { padding: 2px; }"),
    ]);
    let index = root.join("html/index.html");
    let about = root.join("html/pages/about.php");
    let main_css = root.join("css/main.css");
    let extra_css = root.join("css/extra.css");

    let audit = run_audit(&AuditConfig::for_root(root.join("html"))).expect("audit should run");

    assert_eq!(audit.stats.documents_discovered, 3);
    assert_eq!(audit.stats.documents_read, 3);
    assert_eq!(audit.stats.stylesheets_parsed, 2);
    assert_eq!(
        audit.stylesheets.keys().cloned().collect::<Vec<_>>(),
        vec![main_css.clone(), extra_css.clone()]
    );

    let report = audit.class_report();
    assert_eq!(
        report.classes,
        vec![
            usage(
                "box",
                &["color:red"],
                &[&index],
                &[(&main_css, "margin: 0;"), (&extra_css, "padding: 2px;")],
            ),
            usage("menu", &[], &[&index], &[(&main_css, "display:flex")]),
            usage(
                "wide",
                &["padding: 1em"],
                &[&index, &about],
                &[(&extra_css, "width: 100%;")],
            ),
            usage("lead", &[], &[&about], &[]),
        ]
    );
}

#[test]
fn rendered_report_lists_every_source() {
    let (_dir, root) = create_project(&[
        (
            "html/index.html",
            r#"<link rel="stylesheet" href="/css/main.css"><div class="box" style="color:red"><span class="box"></span></div>"#,
        ),
        ("css/main.css", ".box { margin: 0; }"),
    ]);
    let index = root.join("html/index.html");
    let main_css = root.join("css/main.css");

    let report = run_audit(&AuditConfig::for_root(root.join("html")))
        .expect("audit should run")
        .class_report();

    let expected = format!(
        "Unique Classes and Their Current Styles:\n\n\
Class: .box\n  Inline Style: color:red\n  Style in {}: margin: 0;\n  Found in files: {}\n-------------------------\n",
        main_css.display(),
        index.display()
    );
    assert_eq!(report.to_string(), expected);
}

#[test]
fn unreadable_document_does_not_stop_the_run() {
    let (_dir, root) = create_project(&[("html/ok.html", r#"<b class="kept"></b>"#)]);
    let ok = root.join("html/ok.html");
    let vanished = root.join("html/vanished.html");

    let audit = correlate(&[vanished, ok.clone()], &root, &FsSource);

    assert_eq!(audit.stats.documents_skipped, 1);
    let report = audit.class_report();
    assert_eq!(report.classes, vec![usage("kept", &[], &[&ok], &[])]);
}

#[test]
fn project_root_can_differ_from_scan_parent() {
    let (_dir, root) = create_project(&[
        ("site/pages/home.html", r#"<link rel="stylesheet" href="/static/app.css"><i class="icon"></i>"#),
        ("assets/static/app.css", ".icon { width: 1em; }"),
    ]);
    let config = AuditConfig::new(root.join("site"), root.join("assets"));

    let report = run_audit(&config).expect("audit should run").class_report();

    assert_eq!(
        report.get("icon").map(|u| u.stylesheet_matches.clone()),
        Some(vec![StylesheetMatch {
            stylesheet: root.join("assets/static/app.css"),
            rule_body: "width: 1em;".to_string(),
        }])
    );
}

#[test]
fn missing_scan_root_fails() {
    let (_dir, root) = create_project(&[]);
    let err = run_audit(&AuditConfig::for_root(root.join("nowhere"))).expect_err("should fail");
    assert!(matches!(err, AuditError::RootNotFound(_)));
}
