use std::fs::File;
use std::io::Read;
use std::path::Path;

use ccplain_engine::{
    derive_output_path, Document, DocumentWriter, JsonLinesWriter, NamingError, OutputFormat,
    XmlDocumentWriter,
};
use flate2::read::GzDecoder;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_documents() -> Vec<Document> {
    vec![
        Document {
            url: "http://example.com/a".to_string(),
            date: "2017-03-22T07:32:20Z".to_string(),
            content: Some("Hello <world> & Co.".to_string()),
        },
        Document {
            url: "http://example.com/b".to_string(),
            date: "2017-03-23T09:00:00Z".to_string(),
            content: None,
        },
    ]
}

fn read_gzipped(path: &Path) -> String {
    let mut text = String::new();
    GzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

#[test]
fn json_writer_emits_one_gzipped_line_per_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.jsonl.gz");

    let mut writer: Box<dyn DocumentWriter> = Box::new(JsonLinesWriter::create(&path).unwrap());
    for document in &sample_documents() {
        writer.write(document).unwrap();
    }
    writer.finish().unwrap();

    let text = read_gzipped(&path);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["url"], "http://example.com/a");
    assert_eq!(first["content"], "Hello <world> & Co.");

    // Absent content is omitted, not serialized as null.
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["url"], "http://example.com/b");
    assert!(second.get("content").is_none());
}

#[test]
fn xml_writer_wraps_documents_in_a_root_and_escapes_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.xml");

    let mut writer: Box<dyn DocumentWriter> = Box::new(XmlDocumentWriter::create(&path).unwrap());
    for document in &sample_documents() {
        writer.write(document).unwrap();
    }
    writer.finish().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    assert!(text.contains("<documents>"));
    assert!(text.ends_with("</documents>"));
    assert_eq!(text.matches("<document>").count(), 2);
    assert!(text.contains("<url>http://example.com/a</url>"));
    assert!(text.contains("<date>2017-03-22T07:32:20Z</date>"));
    assert!(text.contains("Hello &lt;world&gt; &amp; Co."));
    // A document without content still carries a text element.
    assert!(text.contains("<text/>"));
}

#[test]
fn output_path_replaces_the_archive_extension() {
    let out = Path::new("out");
    assert_eq!(
        derive_output_path(Path::new("dir/crawl.warc"), out, OutputFormat::Json).unwrap(),
        out.join("crawl.jsonl.gz")
    );
    assert_eq!(
        derive_output_path(Path::new("dir/crawl.warc.gz"), out, OutputFormat::Json).unwrap(),
        out.join("crawl.jsonl.gz")
    );
    assert_eq!(
        derive_output_path(Path::new("crawl.warc"), out, OutputFormat::Xml).unwrap(),
        out.join("crawl.xml")
    );
}

#[test]
fn non_warc_inputs_are_rejected() {
    let out = Path::new("out");
    for bad in ["notes.txt", "archive.tar.gz", ".warc"] {
        assert_eq!(
            derive_output_path(Path::new(bad), out, OutputFormat::Json).unwrap_err(),
            NamingError::NotAWarcPath(bad.to_string())
        );
    }
}
