//! Benchmarks for the hot paths a search driver hammers: make/undo,
//! attack queries, and the leaf evaluator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_position_core::{Color, Move, MoveType, Piece, PieceType, Position};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_fen_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");
    group.bench_function("parse_startpos", |b| {
        b.iter(|| Position::from_fen(black_box(STARTPOS)))
    });
    group.bench_function("parse_kiwipete", |b| {
        b.iter(|| Position::from_fen(black_box(KIWIPETE)))
    });
    let pos = Position::from_fen(KIWIPETE);
    group.bench_function("emit_kiwipete", |b| b.iter(|| black_box(&pos).to_fen()));
    group.finish();
}

fn bench_make_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_undo");
    for (name, fen) in [("startpos", STARTPOS), ("kiwipete", KIWIPETE)] {
        group.bench_with_input(BenchmarkId::new("quiet_knight_move", name), fen, |b, &fen| {
            let mut pos = Position::from_fen(fen);
            let origin = pos.pieces(Color::White, PieceType::Knight).next();
            let piece = pos.piece_at(origin).expect("a white knight exists on this fen");
            let target = free_square(&pos, origin);
            let mv = Move::new(MoveType::Normal, origin, target, piece, None, None);
            b.iter(|| {
                pos.make_move(black_box(mv));
                pos.undo_move(black_box(mv));
            });
        });
    }
    group.finish();
}

fn bench_is_attacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_attacked");
    for (name, fen) in [("startpos", STARTPOS), ("kiwipete", KIWIPETE)] {
        let pos = Position::from_fen(fen);
        let king_square = pos.king_square(Color::White);
        group.bench_with_input(BenchmarkId::new("king_square", name), &pos, |b, pos| {
            b.iter(|| black_box(pos).is_attacked(black_box(king_square), Color::Black))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, fen) in [("startpos", STARTPOS), ("kiwipete", KIWIPETE)] {
        let pos = Position::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("evaluate", name), &pos, |b, pos| {
            b.iter(|| chess_position_core::eval::evaluate(black_box(pos)))
        });
    }
    group.finish();
}

/// Picks an empty square to serve as a quiet-move target for the knight on
/// `origin`, so the make/undo benchmark never has to thread capture logic.
fn free_square(pos: &Position, avoid: chess_position_core::Square) -> chess_position_core::Square {
    use chess_position_core::types::all_squares;
    all_squares()
        .find(|&sq| sq != avoid && pos.piece_at(sq).is_none())
        .expect("an empty square exists on a real position")
}

criterion_group!(benches, bench_fen_round_trip, bench_make_undo, bench_is_attacked, bench_evaluate);
criterion_main!(benches);
