use bertlv::{Category, DataObject, DecoderConfig, TlvDecoder, TlvError, TlvNode, parse, parse_hex};

fn concat(nodes: &[TlvNode]) -> Vec<u8> {
    nodes.iter().flat_map(TlvNode::bytes).collect()
}

#[test]
fn test_empty_input() {
    assert!(parse(&[]).unwrap().is_empty());
    assert!(DataObject::parse(&[]).unwrap().is_empty());
}

#[test]
fn test_plain_node() {
    let nodes = parse(&[0xC1, 0x01, 0x01]).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].tag(), 0xC1);
    assert_eq!(nodes[0].value(), &[0x01]);
    assert_eq!(nodes[0].category(), &Category::Plain);
}

#[test]
fn test_constructed_node() {
    let nodes = parse(&[0xE1, 0x03, 0x5A, 0x01, 0xFF]).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].value(), &[0x5A, 0x01, 0xFF]);
    let children = nodes[0].children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].tag(), 0x5A);
    assert_eq!(children[0].value(), &[0xFF]);
    assert!(!children[0].is_constructed());
}

#[test]
fn test_errors() {
    assert_eq!(parse(&[0xC1]), Err(TlvError::MissingLength));
    assert!(matches!(
        parse(&[0xE1, 0x03, 0xFF, 0xFF]),
        Err(TlvError::ValueTooShort { .. })
    ));
    assert!(matches!(
        parse(&[0x4F, 0x82, 0x01]),
        Err(TlvError::WrongLongLength { .. })
    ));
    assert!(matches!(
        parse_hex("XYZ1"),
        Err(TlvError::FailedToParseHexString(_))
    ));
    assert_eq!(TlvNode::padding(0x9F), Err(TlvError::WrongPaddingByte(0x9F)));
}

#[test]
fn test_long_forms() {
    let nodes = parse(&[0xDF, 0xDF, 0xDF, 0x33, 0x81, 0x00]).unwrap();
    assert_eq!(nodes[0].tag(), 0xDFDF_DF33);
    assert!(nodes[0].value().is_empty());

    let data = [0x4F, 0x84, 0x00, 0x00, 0x00, 0x03, 0xAA, 0xBB, 0xCC];
    let nodes = parse(&data).unwrap();
    assert_eq!(nodes[0].tag(), 0x4F);
    assert_eq!(nodes[0].value(), &[0xAA, 0xBB, 0xCC]);
    assert_eq!(nodes[0].bytes(), data.to_vec());
}

#[test]
fn test_mixed_padding_round_trip() {
    let data = [
        0x00, 0xDF, 0xBF, 0x05, 0x01, 0x01, 0x00, 0x00, 0xC1, 0x01, 0x00, 0x00,
    ];
    let nodes = parse(&data).unwrap();
    assert_eq!(nodes.len(), 6);
    assert_eq!(nodes.iter().filter(|n| n.is_padding()).count(), 4);
    assert_eq!(concat(&nodes), data.to_vec());
}

#[test]
fn test_emv_read_record_response() {
    // READ RECORD template with track 2, PAN and cardholder name
    let hex = "70 1B 57 08 47 61 73 90 01 01 01 19 5A 08 47 61 73 90 01 01 01 19 \
               5F 20 04 54 45 53 54";
    let nodes = parse_hex(hex).unwrap();
    assert_eq!(nodes.len(), 1);

    let record = &nodes[0];
    assert_eq!(record.tag(), 0x70);
    assert_eq!(record.children().len(), 3);
    assert_eq!(record.find(0x5F20).unwrap().value(), b"TEST");
    assert_eq!(
        record.find(0x5A).unwrap().value(),
        &[0x47, 0x61, 0x73, 0x90, 0x01, 0x01, 0x01, 0x19]
    );
    assert_eq!(parse(&record.bytes()).unwrap(), nodes);
}

#[test]
fn test_rebuilt_tree_matches_parsed_tree() {
    let name = TlvNode::new(0x5F20, b"TEST".to_vec()).unwrap();
    let aid = TlvNode::new(0x4F, vec![0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10]).unwrap();
    let app = TlvNode::constructed(0x61, vec![aid, name]).unwrap();
    let fci = TlvNode::constructed(0x6F, vec![app]).unwrap();

    let parsed = parse(&fci.bytes()).unwrap();
    assert_eq!(parsed, vec![fci]);
}

#[test]
fn test_adversarial_nesting_rejected() {
    let mut data = vec![0x5A, 0x00];
    for _ in 0..300 {
        let mut outer = vec![0xE1];
        outer.extend_from_slice(bertlv::Length::new(data.len()).as_bytes());
        outer.extend_from_slice(&data);
        data = outer;
    }
    assert!(matches!(parse(&data), Err(TlvError::NestingTooDeep { .. })));

    let config = DecoderConfig::new().with_max_depth(300);
    let nodes = TlvDecoder::with_config(&data, config).decode_all().unwrap();
    assert_eq!(concat(&nodes), data);
}

#[test]
fn test_dol_hex() {
    let dol = DataObject::parse_hex("9F66049F02069F03069F1A0295055F2A029A039C019F3704").unwrap();
    assert_eq!(dol.len(), 9);
    assert_eq!(dol[0], DataObject::new(0x9F66, 4));
    assert_eq!(dol[4], DataObject::new(0x95, 5));
    assert_eq!(dol[8], DataObject::new(0x9F37, 4));
}

#[test]
fn test_serialize() {
    let nodes = parse(&[0xE1, 0x03, 0x5A, 0x01, 0xFF]).unwrap();
    let json = serde_json::to_value(&nodes[0]).unwrap();
    assert_eq!(json["tag"], 0xE1);
    assert_eq!(json["category"]["Constructed"][0]["tag"], 0x5A);

    let object = DataObject::new(0x9F02, 6);
    let json = serde_json::to_string(&object).unwrap();
    assert_eq!(serde_json::from_str::<DataObject>(&json).unwrap(), object);
}
