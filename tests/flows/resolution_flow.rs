//! End-to-end resolution flow against a scripted transport: domain list in,
//! merged hosts file out, no network.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::ScriptedTransport;
use dohgen_domain::{HostEntry, RecordType, ResolverConfig};
use dohgen_infrastructure::dns::DohResolver;
use dohgen_infrastructure::hosts::{merge_files, read_domains, write_lines, ListLine};

fn resolver(transport: ScriptedTransport) -> DohResolver {
    DohResolver::new(Arc::new(transport), ResolverConfig::default())
}

async fn pipeline(resolver: &DohResolver, input: &str, output: &str, extra: &str, merged: &str) {
    let mut lines = Vec::new();
    for line in read_domains(input).unwrap() {
        match line {
            ListLine::Passthrough(text) => lines.push(text),
            ListLine::Domain(domain) => {
                let addresses = resolver.resolve(&domain).await;
                let domain: Arc<str> = Arc::from(domain);
                for address in addresses {
                    lines.push(HostEntry::new(address, Arc::clone(&domain)).to_string());
                }
            }
        }
    }
    write_lines(output, &lines).unwrap();
    merge_files(&[output, extra], merged).unwrap();
}

#[tokio::test]
async fn test_full_flow_produces_merged_hosts_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let extra = dir.path().join("extra.txt");
    let merged = dir.path().join("hosts.txt");

    std::fs::write(&input, "# managed domains\n\nexample.com\nexample.org\n").unwrap();
    std::fs::write(&extra, "127.0.0.1 localhost\n").unwrap();

    let transport = ScriptedTransport::new()
        .with_answer("example.com", RecordType::A, &[93, 184, 216, 34])
        .with_answer(
            "example.com",
            RecordType::AAAA,
            &[
                0x26, 0x06, 0x28, 0x00, 0x02, 0x20, 0x00, 0x01, //
                0x02, 0x48, 0x18, 0x93, 0x25, 0xc8, 0x19, 0x46,
            ],
        )
        .with_answer("example.org", RecordType::A, &[93, 184, 216, 34]);

    pipeline(
        &resolver(transport),
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        extra.to_str().unwrap(),
        merged.to_str().unwrap(),
    )
    .await;

    let output_text = std::fs::read_to_string(&output).unwrap();
    let expected_output = "\
# managed domains

93.184.216.34 example.com
2606:2800:220:1:248:1893:25c8:1946 example.com
93.184.216.34 example.org
";
    assert_eq!(output_text, expected_output);

    let merged_text = std::fs::read_to_string(&merged).unwrap();
    assert!(merged_text.contains("93.184.216.34 example.com"));
    assert!(merged_text.contains("127.0.0.1 localhost"));
    assert!(merged_text.contains(&format!("# --- Start of {} ---", output.to_str().unwrap())));
    assert!(merged_text.contains(&format!("# --- End of {} ---", extra.to_str().unwrap())));
}

#[tokio::test]
async fn test_unresolvable_domain_leaves_no_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let extra = dir.path().join("extra.txt");
    let merged = dir.path().join("hosts.txt");

    std::fs::write(&input, "dead.example\nlive.example\n").unwrap();

    let transport = ScriptedTransport::new().with_answer("live.example", RecordType::A, &[10, 0, 0, 7]);

    pipeline(
        &resolver(transport),
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        extra.to_str().unwrap(),
        merged.to_str().unwrap(),
    )
    .await;

    let output_text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(output_text, "10.0.0.7 live.example\n");
}

#[tokio::test]
async fn test_duplicate_answers_deduplicated_per_domain() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let extra = dir.path().join("extra.txt");
    let merged = dir.path().join("hosts.txt");

    std::fs::write(&input, "dup.example\n").unwrap();

    let transport = ScriptedTransport::new().with_answers(
        "dup.example",
        RecordType::A,
        &[&[1, 1, 1, 1], &[1, 1, 1, 1], &[2, 2, 2, 2]],
    );

    pipeline(
        &resolver(transport),
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        extra.to_str().unwrap(),
        merged.to_str().unwrap(),
    )
    .await;

    let output_text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(output_text, "1.1.1.1 dup.example\n2.2.2.2 dup.example\n");
}
