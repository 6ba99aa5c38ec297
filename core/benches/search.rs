use cozy_chess::Board;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use search::{AlphaBetaEngine, AlphaBetaSettings, Engine, MctsEngine, MctsSettings};
use uci::commands::GoParams;

const DEPTH: u8 = 4;
const LEAF_BUDGET: u32 = 500;
const SAMPLE_SIZE: usize = 10;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r7/1r6/1k6/8/8/8/4K3/8 w - - 0 1",
];

fn bench_engine(c: &mut Criterion, group_name: &str, engine: &mut dyn Engine) {
    let mut group = c.benchmark_group(group_name);
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &board, |b, board| {
            b.iter(|| {
                engine.start();
                engine.set_position(board.clone(), Vec::new());
                black_box(engine.best_move(&GoParams::default(), None).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_alpha_beta(c: &mut Criterion) {
    let mut engine = AlphaBetaEngine::new(AlphaBetaSettings {
        search_depth: DEPTH,
        ..Default::default()
    });
    bench_engine(c, &format!("alpha_beta/depth_{}", DEPTH), &mut engine);
}

fn bench_mcts(c: &mut Criterion) {
    let mut engine = MctsEngine::new(MctsSettings {
        leaf_budget: LEAF_BUDGET,
        seed: Some(1),
        ..Default::default()
    });
    bench_engine(c, &format!("mcts/leaves_{}", LEAF_BUDGET), &mut engine);
}

criterion_group!(benches, bench_alpha_beta, bench_mcts);
criterion_main!(benches);
