//! Assembler and renderer behavior over whole catalogs.

use sdknix_core::{GenError, NullReporter, RenderOptions, Reporter, UrlResolver, assemble, render};
use sdknix_schema::{
    Archive, ArchiveFile, Catalog, Checksum, License, PackageType, RemotePackage,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Prefixes relative references with a fixed repository root.
struct PrefixResolver;

impl UrlResolver for PrefixResolver {
    fn resolve(&self, download_ref: &str, _package: &RemotePackage) -> anyhow::Result<String> {
        Ok(format!("https://repo.example/{download_ref}"))
    }
}

struct FailingResolver;

impl UrlResolver for FailingResolver {
    fn resolve(&self, _download_ref: &str, _package: &RemotePackage) -> anyhow::Result<String> {
        anyhow::bail!("repository offline")
    }
}

#[derive(Default)]
struct CollectingReporter {
    lines: Mutex<Vec<(String, String, String)>>,
}

impl Reporter for CollectingReporter {
    fn resolved(&self, id: &str, version: &str, url: &str) {
        self.lines
            .lock()
            .expect("reporter lock")
            .push((id.to_string(), version.to_string(), url.to_string()));
    }
}

fn archive(os: Option<&str>, arch: Option<&str>, url: &str, kind: &str, value: &str) -> Archive {
    Archive {
        host_os: os.map(str::to_string),
        host_arch: arch.map(str::to_string),
        complete: ArchiveFile {
            url: url.to_string(),
            checksum: Checksum {
                kind: kind.to_string(),
                value: value.to_string(),
            },
        },
    }
}

fn package(
    path: &str,
    package_type: PackageType,
    license: (&str, &str),
    archives: Vec<Archive>,
) -> RemotePackage {
    RemotePackage {
        path: path.to_string(),
        display_name: format!("Display {path}"),
        version: "1.0".to_string(),
        license: License {
            id: license.0.to_string(),
            hash: license.1.to_string(),
        },
        package_type,
        archives,
    }
}

fn catalog(packages: Vec<(&str, RemotePackage)>) -> Catalog {
    Catalog {
        packages: packages
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn end_to_end_single_tools_package() {
    let cat = catalog(vec![(
        "tools",
        package(
            "tools",
            PackageType::Generic,
            ("android-sdk-license", "24333f8a"),
            vec![archive(
                Some("linux"),
                Some("x64"),
                "tools-linux.zip",
                "sha256",
                "cafe1234",
            )],
        ),
    )]);

    let doc = assemble(&cat, &PrefixResolver, &NullReporter).expect("assembles");
    let text = render(&doc, RenderOptions::default());

    assert!(text.contains("\n  tools = mkTools {\n"));
    assert!(text.contains("\n      x86_64-linux = {\n"));
    assert!(text.contains("sha256 = \"cafe1234\";"));
    assert!(text.contains("url = \"https://repo.example/tools-linux.zip\";"));
}

#[test]
fn rendered_fields_carry_input_values_verbatim() {
    let cat = catalog(vec![(
        "extras;google;usb_driver",
        package(
            "extras;google;usb_driver",
            PackageType::Extra,
            ("android-googletv-license", "601ab88a"),
            vec![archive(Some("windows"), None, "usb_driver.zip", "sha-1", "d0abe9")],
        ),
    )]);

    let doc = assemble(&cat, &PrefixResolver, &NullReporter).expect("assembles");
    let text = render(&doc, RenderOptions::default());

    // Literal fields round-trip: what went in is what a re-parse would see.
    assert!(text.contains("extras-google-usb-driver = mkSrcOnly {"));
    assert!(text.contains("id = \"extras;google;usb_driver\";"));
    assert!(text.contains("pname = \"extras-google-usb-driver\";"));
    assert!(text.contains("version = \"1.0\";"));
    assert!(text.contains("displayName = \"Display extras;google;usb_driver\";"));
    let dir = format!(
        "path = \"extras{sep}google{sep}usb_driver\";",
        sep = std::path::MAIN_SEPARATOR
    );
    assert!(text.contains(&dir));
    assert!(text.contains("id = \"android-googletv-license\";"));
    assert!(text.contains("hash = \"601ab88a\";"));
    assert!(text.contains("sha1 = \"d0abe9\";"));
    assert!(text.contains("xml = ./extras-google-usb-driver.xml;"));
}

#[test]
fn package_order_follows_raw_path_not_input_keys() {
    // Map keys sort opposite to the paths they carry.
    let cat = catalog(vec![
        (
            "z-first-key",
            package(
                "build-tools;30.0.3",
                PackageType::Generic,
                ("l", "h"),
                vec![archive(Some("linux"), None, "a.zip", "sha1", "aa")],
            ),
        ),
        (
            "a-second-key",
            package(
                "tools",
                PackageType::Generic,
                ("l", "h"),
                vec![archive(Some("linux"), None, "b.zip", "sha1", "bb")],
            ),
        ),
    ]);

    let doc = assemble(&cat, &PrefixResolver, &NullReporter).expect("assembles");
    let order: Vec<&str> = doc.packages.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(order, ["build-tools;30.0.3", "tools"]);
}

#[test]
fn licenses_dedup_by_id_first_seen_sorted() {
    let cat = catalog(vec![
        (
            "a",
            package(
                "platforms;android-30",
                PackageType::Platform,
                ("android-sdk-license", "hash-from-first-by-path"),
                vec![],
            ),
        ),
        (
            "b",
            package(
                "tools",
                PackageType::Generic,
                ("android-sdk-license", "hash-from-second-by-path"),
                vec![],
            ),
        ),
        (
            "c",
            package(
                "emulator",
                PackageType::Generic,
                ("android-sdk-preview-license", "preview-hash"),
                vec![],
            ),
        ),
    ]);

    let doc = assemble(&cat, &PrefixResolver, &NullReporter).expect("assembles");
    let ids: Vec<&str> = doc.licenses.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["android-sdk-license", "android-sdk-preview-license"]);
    // First seen in raw-path order (emulator < platforms < tools).
    assert_eq!(doc.licenses[0].hash, "hash-from-first-by-path");
}

#[test]
fn unknown_platform_aborts_assembly() {
    let cat = catalog(vec![(
        "tools",
        package(
            "tools",
            PackageType::Generic,
            ("l", "h"),
            vec![archive(Some("bogus"), None, "t.zip", "sha1", "aa")],
        ),
    )]);

    let err = assemble(&cat, &PrefixResolver, &NullReporter).unwrap_err();
    assert!(matches!(err, GenError::Platform(_)), "got {err}");
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn unknown_checksum_algorithm_aborts_assembly() {
    let cat = catalog(vec![(
        "tools",
        package(
            "tools",
            PackageType::Generic,
            ("l", "h"),
            vec![archive(Some("linux"), None, "t.zip", "md5", "aa")],
        ),
    )]);

    let err = assemble(&cat, &PrefixResolver, &NullReporter).unwrap_err();
    assert!(matches!(err, GenError::Checksum(_)), "got {err}");
    assert!(err.to_string().contains("md5"));
}

#[test]
fn resolver_failure_propagates_with_package_id() {
    let cat = catalog(vec![(
        "tools",
        package(
            "tools",
            PackageType::Generic,
            ("l", "h"),
            vec![archive(Some("linux"), None, "t.zip", "sha1", "aa")],
        ),
    )]);

    let err = assemble(&cat, &FailingResolver, &NullReporter).unwrap_err();
    assert!(matches!(err, GenError::Resolve { ref id, .. } if id == "tools"));
    assert!(err.to_string().contains("repository offline"));
}

#[test]
fn reporter_sees_every_resolved_archive() {
    let cat = catalog(vec![(
        "tools",
        package(
            "tools",
            PackageType::Generic,
            ("l", "h"),
            vec![
                archive(Some("linux"), None, "t-linux.zip", "sha1", "aa"),
                archive(Some("macosx"), None, "t-mac.zip", "sha1", "bb"),
            ],
        ),
    )]);

    let reporter = CollectingReporter::default();
    assemble(&cat, &PrefixResolver, &reporter).expect("assembles");
    let lines = reporter.lines.into_inner().expect("reporter lock");
    assert_eq!(
        lines,
        [
            (
                "tools".to_string(),
                "1.0".to_string(),
                "https://repo.example/t-linux.zip".to_string()
            ),
            (
                "tools".to_string(),
                "1.0".to_string(),
                "https://repo.example/t-mac.zip".to_string()
            ),
        ]
    );
}
