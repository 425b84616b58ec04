use engine::{Board, Color, EngineError, Notation, PieceKind, Square};

fn sq(name: &str) -> Square {
    Square::from_name(name).expect("valid square")
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid fen")
}

#[test]
fn parses_piece_hint_capture_and_destination() {
    let parsed = Notation::parse("Nge5").expect("valid notation");
    assert_eq!(parsed.kind, PieceKind::Knight);
    assert_eq!(parsed.file_hint, Some('g'));
    assert!(!parsed.capture);
    assert_eq!(parsed.destination, sq("e5"));

    let parsed = Notation::parse("exd5").expect("valid notation");
    assert_eq!(parsed.kind, PieceKind::Pawn);
    assert_eq!(parsed.file_hint, Some('e'));
    assert!(parsed.capture);

    let parsed = Notation::parse("Qxh8#").expect("valid notation");
    assert_eq!(parsed.kind, PieceKind::Queen);
    assert_eq!(parsed.file_hint, None);
    assert!(parsed.capture);
    assert_eq!(parsed.destination, sq("h8"));
}

#[test]
fn rejects_malformed_strings() {
    for text in ["", "e", "e9", "Ni5", "N1e5", "Nabe5", "Nx"] {
        match Notation::parse(text) {
            Err(EngineError::MalformedMoveString(_)) => {}
            other => panic!("{text}: expected malformed move string, got {:?}", other),
        }
    }
    match Notation::parse("Ze5") {
        Err(EngineError::UnknownPieceKind('Z')) => {}
        other => panic!("expected unknown piece kind, got {:?}", other),
    }
}

#[test]
fn single_knight_resolves() {
    let b = board("8/8/8/8/8/5N2/8/8 w");
    let instruction = b.resolve("Ne5").expect("resolvable");
    assert_eq!(instruction.origin, sq("f3"));
    assert_eq!(instruction.destination, sq("e5"));
    assert_eq!(instruction.notation, "Ne5");
    assert!(!instruction.capture);
}

#[test]
fn knight_file_hint_disambiguates() {
    let b = board("8/8/8/8/2N3N1/8/8/8 w");
    match b.resolve("Ne5") {
        Err(EngineError::AmbiguousMove { origins, .. }) => {
            assert_eq!(origins, vec![sq("c4"), sq("g4")]);
        }
        other => panic!("expected ambiguous move, got {:?}", other),
    }
    assert_eq!(b.resolve("Nge5").expect("g knight").origin, sq("g4"));
    assert_eq!(b.resolve("Nce5").expect("c knight").origin, sq("c4"));
}

#[test]
fn two_rooks_on_one_rank() {
    let b = board("8/8/8/R6R/8/8/8/8 w");
    match b.resolve("Re5") {
        Err(EngineError::AmbiguousMove { notation, origins }) => {
            assert_eq!(notation, "Re5");
            assert_eq!(origins.len(), 2);
        }
        other => panic!("expected ambiguous move, got {:?}", other),
    }
    let instruction = b.resolve("Rae5").expect("a-file rook");
    assert_eq!(instruction.origin, sq("a5"));
    assert_eq!(instruction.destination, sq("e5"));
}

#[test]
fn unreachable_destination() {
    let b = board("8/8/8/8/8/8/8/1Q6 w");
    match b.resolve("Qh8") {
        Err(EngineError::NoPieceCanReach(dest)) => assert_eq!(dest, sq("h8")),
        other => panic!("expected no piece can reach, got {:?}", other),
    }
}

#[test]
fn missing_piece_kind() {
    let b = board("8/8/8/8/8/8/8/1R6 w");
    match b.resolve("Qh8") {
        Err(EngineError::NoMatchingPiece(sym)) => assert_eq!(sym, "Q"),
        other => panic!("expected no matching piece, got {:?}", other),
    }
    match b.resolve("Rch1") {
        Err(EngineError::NoMatchingPiece(sym)) => assert_eq!(sym, "Rc"),
        other => panic!("expected no matching piece, got {:?}", other),
    }
}

#[test]
fn capture_with_check_suffix() {
    let b = board("7r/8/8/8/8/8/8/Q7 w");
    let instruction = b.resolve("Qxh8+").expect("queen takes rook");
    assert_eq!(instruction.origin, sq("a1"));
    assert_eq!(instruction.destination, sq("h8"));
    assert!(instruction.capture);
}

#[test]
fn pawn_captures_need_the_file() {
    let b = board("8/8/8/3p4/2P1P3/8/8/8 w");
    match b.resolve("xd5") {
        Err(EngineError::AmbiguousMove { origins, .. }) => {
            assert_eq!(origins, vec![sq("c4"), sq("e4")]);
        }
        other => panic!("expected ambiguous move, got {:?}", other),
    }
    assert_eq!(b.resolve("exd5").expect("e pawn").origin, sq("e4"));
    assert_eq!(b.resolve("cxd5").expect("c pawn").origin, sq("c4"));
    assert_eq!(b.resolve("e5").expect("push").origin, sq("e4"));
}

#[test]
fn resolve_for_limits_candidates_to_one_side() {
    let b = board("8/8/8/8/8/2N1n3/8/8 w");
    match b.resolve("Nd5") {
        Err(EngineError::AmbiguousMove { .. }) => {}
        other => panic!("expected ambiguous move, got {:?}", other),
    }
    assert_eq!(b.resolve_for(Color::White, "Nd5").unwrap().origin, sq("c3"));
    assert_eq!(b.resolve_for(Color::Black, "Nd5").unwrap().origin, sq("e3"));
}

#[test]
fn resolution_does_not_touch_the_board() {
    let b = Board::starting_position();
    let before = b.clone();
    b.resolve("Nf3").expect("knight move");
    let _ = b.resolve("Qh5");
    assert_eq!(b, before);
}

#[test]
fn error_messages() {
    let err = EngineError::AmbiguousMove {
        notation: "Re5".into(),
        origins: vec![sq("a5"), sq("h5")],
    };
    assert_eq!(
        err.to_string(),
        "ambiguous move Re5: found 2 origins (a5, h5)"
    );
    assert_eq!(
        EngineError::NoPieceCanReach(sq("h8")).to_string(),
        "no pieces could go to: h8"
    );
}
