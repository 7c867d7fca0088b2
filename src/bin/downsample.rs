//! Shrinks an existing orbital cloud by uniform random sampling, producing
//! the lightweight variants the story pages load.
//!
//! Usage: `downsample <input.ply> [output.ply] [target_points]`. The output
//! defaults to `<stem>-story.ply` beside the input; the target defaults to
//! 18,000 points.

use std::{
    env,
    path::{Path, PathBuf},
    process,
};

use orbital_gen::downsample;

fn main() {
    let mut args = env::args().skip(1);

    let input = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("用法: downsample <input.ply> [output.ply] [target_points]");
            process::exit(2);
        }
    };

    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&input));

    let target = match args.next() {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("| 错误 | 目标点数必须是整数: {v}");
                process::exit(2);
            }
        },
        None => downsample::DEFAULT_TARGET,
    };

    if !input.exists() {
        println!("| 错误 | 未找到输入文件: {}", input.display());
        process::exit(1);
    }

    println!("| 系统 | 从 {} 采样生成轻量版...", input.display());

    let mut rng = rand::thread_rng();
    match downsample::run(&input, &output, target, &mut rng) {
        Ok(report) => {
            println!("| 信息 | 原始文件包含 {} 个顶点", report.read);
            println!("| 信息 | 采样后包含 {} 个顶点", report.written);
            println!("| 完成 | 轻量版已保存至: {}", output.display());
        }
        Err(e) => {
            println!("| 错误 | {e}");
            process::exit(1);
        }
    }
}

/// `1s.ply` → `1s-story.ply`, beside the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cloud");

    input.with_file_name(format!("{stem}-story.ply"))
}
