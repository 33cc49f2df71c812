//! Performance benchmarks for gentree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gentree::test_utils::TestTree;
use gentree::tree::EntryKind;
use gentree::{ExclusionRules, WalkerConfig, render_to_string};

/// Build `dirs` directories of `files_per_dir` sources, each next to a
/// handful of simulation artifacts the walker must skip.
fn create_workspace(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.touch(&format!("block_{}/src_{}.sv", d, f));
        }
        tree.touch(&format!("block_{}/sim.log", d));
        tree.touch(&format!("block_{}/waves.fsdb", d));
        tree.touch(&format!("block_{}/work/_info", d));
        tree.touch(&format!("block_{}/csrc/obj.o", d));
    }
    tree
}

fn bench_exclusion_rules(c: &mut Criterion) {
    let rules = ExclusionRules::builtin();
    let mut group = c.benchmark_group("exclusion_rules");

    group.bench_function("kept_file", |b| {
        b.iter(|| rules.is_excluded(black_box("alu_pipeline.sv"), EntryKind::File))
    });

    group.bench_function("excluded_extension", |b| {
        b.iter(|| rules.is_excluded(black_box("waves.fsdb"), EntryKind::File))
    });

    group.bench_function("excluded_dir", |b| {
        b.iter(|| rules.is_excluded(black_box("simv.daidir"), EntryKind::Directory))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let small = create_workspace(10, 10);
    group.bench_function("small_100_files", |b| {
        b.iter(|| render_to_string(black_box(small.path()), WalkerConfig::default()))
    });

    let large = create_workspace(50, 40);
    group.bench_function("large_2000_files", |b| {
        b.iter(|| render_to_string(black_box(large.path()), WalkerConfig::default()))
    });

    group.bench_function("large_depth_1", |b| {
        b.iter(|| {
            render_to_string(
                black_box(large.path()),
                WalkerConfig::default().with_max_depth(Some(1)),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_exclusion_rules, bench_render);
criterion_main!(benches);
