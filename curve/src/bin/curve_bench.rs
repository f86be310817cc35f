use curve::geometry::math::polyline_length;
use curve::{ControlPoints, Vec2};
use std::time::Instant;

fn build_points(count: usize) -> ControlPoints {
    let mut pts = ControlPoints::unbounded();
    // Zig-zag across [-1, 1] so every degree gives a visible curve
    for i in 0..count {
        let x = -1.0 + 2.0 * i as f32 / (count.max(2) - 1) as f32;
        let y = if i % 2 == 0 { -0.5 } else { 0.5 };
        let _ = pts.append(Vec2::new(x, y));
    }
    pts
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 32usize;
    let mut steps = 100u32;
    let mut iters = 2000usize;
    let mut radius = 0.1f32;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--points=") { if let Ok(v)=val.parse() { points=v; } }
        else if let Some(val)=a.strip_prefix("--steps=") { if let Ok(v)=val.parse() { steps=v; } }
        else if let Some(val)=a.strip_prefix("--iters=") { if let Ok(v)=val.parse() { iters=v; } }
        else if let Some(val)=a.strip_prefix("--radius=") { if let Ok(v)=val.parse() { radius=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let pts = build_points(points);
    let mut times_ms: Vec<f64> = Vec::with_capacity(iters);
    let mut length = 0.0f32;
    let mut hits = 0usize;
    let start_all = Instant::now();
    for k in 0..iters {
        let t0 = Instant::now();
        match pts.sample(steps) {
            Ok(poly) => length = polyline_length(&poly),
            Err(e) => { eprintln!("sample failed: {}", e); std::process::exit(2); }
        }
        // One pick per frame, cycling across the control polygon
        let q = Vec2::new(-1.0 + (k % 200) as f32 * 0.01, if k % 2 == 0 { -0.45 } else { 0.45 });
        if pts.pick(radius, q).is_some() { hits += 1; }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("points={} steps={} iters={} hits={} length={:.4} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", points, steps, iters, hits, length, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
