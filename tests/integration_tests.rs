use std::io::{self, Cursor, Write};
use valtree::{
    from_reader, from_reader_with_options, from_slice, from_str, to_string_with_options,
    to_writer, to_writer_with_options, Error, Indent, LineEnding, Node, ParseOptions,
    WriteOptions,
};

const EXAMPLE: &str = "\
// sample
a 1
b 2.5
c
\td 3
\te four
g-is-long
\th 42 // the answer
";

struct FailingWriter {
    written: Vec<u8>,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() >= self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        let n = buf.len().min(self.limit - self.written.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
    }
}

#[test]
fn test_reader_writer_round_trip() {
    let parsed = from_reader(Cursor::new(EXAMPLE.as_bytes())).unwrap();
    assert!(!parsed.is_truncated());

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &parsed.tree).unwrap();

    let reparsed = from_slice(&buffer).unwrap();
    assert_eq!(reparsed.tree, parsed.tree);
}

#[test]
fn test_reader_failure_is_reported() {
    let err = from_reader(FailingReader).unwrap_err();
    assert_eq!(err, Error::Io("device unplugged".to_string()));
}

#[test]
fn test_reader_invalid_utf8() {
    let err = from_reader(Cursor::new(vec![b'a', 0xfe])).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8 { valid_up_to: 1 }));
}

#[test]
fn test_reader_respects_options() {
    let options = ParseOptions::new().with_max_size(4);
    let parsed = from_reader_with_options(Cursor::new("a 1\nb 2\n"), options).unwrap();
    assert!(parsed.is_truncated());
    assert_eq!(parsed.tree.len(), 1);
}

#[test]
fn test_writer_failure_keeps_partial_output() {
    let tree = from_str(EXAMPLE).tree;
    let mut writer = FailingWriter {
        written: Vec::new(),
        limit: 5,
    };
    let result = to_writer(&mut writer, &tree);
    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(writer.written, b"a 1\nb");
}

#[test]
fn test_custom_layout_parses_back() {
    let tree = from_str(EXAMPLE).tree;
    let options = WriteOptions::new()
        .with_indent(Indent::Spaces(3))
        .with_line_ending(LineEnding::CrLf)
        .with_separator('\t');

    let text = to_string_with_options(&tree, options.clone());
    assert!(text.contains("\r\n   d\t3\r\n"));
    assert_eq!(from_str(&text).tree, tree);

    let mut buffer = Vec::new();
    to_writer_with_options(&mut buffer, &tree, options).unwrap();
    assert_eq!(buffer, text.as_bytes());
}

#[test]
fn test_modify_and_save() {
    let mut tree = from_str(EXAMPLE).tree;
    assert_eq!(tree.query("g-is-long.h").map(Node::as_str), Some("42"));

    tree.add_child(Node::new("l", "90,90"));
    if let Some(h) = tree.query_mut("g-is-long.h") {
        h.set_f64(0.5);
    }

    let text = tree.to_string();
    assert!(text.ends_with("g-is-long\n\th 0.5\nl 90,90\n"));
}

#[test]
fn test_serde_json_shape() {
    let mut tree = Node::empty();
    tree.add_tree("a.b", "1");

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "key": "",
            "value": "",
            "children": [
                { "key": "a", "value": "", "children": [ { "key": "b", "value": "1" } ] }
            ]
        })
    );
}

#[test]
fn test_serde_json_derives_numeric_views() {
    let json = r#"{ "key": "root", "children": [ { "key": "n", "value": "12.5" } ] }"#;
    let tree: Node = serde_json::from_str(json).unwrap();
    let n = tree.child("n").unwrap();
    assert_eq!(n.as_i64(), 12);
    assert_eq!(n.as_f64(), 12.5);
    assert_eq!(tree.as_str(), "");
}

#[test]
fn test_flatten_to_json_map() {
    let tree = from_str(EXAMPLE).tree;
    let json = serde_json::to_string(&tree.flatten()).unwrap();
    assert_eq!(
        json,
        r#"{"a":"1","b":"2.5","c":"","c.d":"3","c.e":"four","g-is-long":"","g-is-long.h":"42"}"#
    );
}
