mod config;
mod modes;
mod renderer;
mod solver;
mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use modes::ModeController;
use solver::{channel_step, ChannelParams, ForcingMode};
use state::{ChannelSnapshot, ChannelState};

/// Control gestures forwarded to the physics thread. Drained between steps,
/// so a mode change is applied atomically relative to `channel_step`.
enum ControlMsg {
    AdvanceMode,
    CycleDuration,
    CycleBrightness,
}

/// One rendered frame's worth of data from the physics thread.
struct Frame {
    snap: ChannelSnapshot,
    mode: ForcingMode,
    steps_per_frame: usize,
    brightness: f64,
}

/// Channels connecting the main (render) thread to the physics thread.
struct PhysicsChannels {
    ctrl_tx: mpsc::Sender<ControlMsg>,
    frame_rx: mpsc::Receiver<Frame>,
    snap_return_tx: mpsc::Sender<ChannelSnapshot>,
}

/// Spawn the physics thread and return its channels + join handle.
///
/// The thread owns the grid and the mode controller; the bounded frame
/// channel paces it against the render loop, and returned snapshot buffers
/// are reused to avoid steady-state allocation.
fn spawn_physics_thread(
    params: ChannelParams,
    running: Arc<AtomicBool>,
) -> (PhysicsChannels, std::thread::JoinHandle<()>) {
    let (ctrl_tx, ctrl_rx) = mpsc::channel::<ControlMsg>();
    let (frame_tx, frame_rx) = mpsc::sync_channel::<Frame>(1);
    let (snap_return_tx, snap_return_rx) = mpsc::channel::<ChannelSnapshot>();

    let handle = std::thread::spawn(move || {
        let mut ctl = ModeController::new();
        let mut sim = ChannelState::new(&params);
        let mut snap_buf = ChannelSnapshot::new_empty(params.nodes);

        while running.load(Ordering::SeqCst) {
            while let Ok(msg) = ctrl_rx.try_recv() {
                match msg {
                    ControlMsg::AdvanceMode => {
                        let mode = ctl.advance_mode(&mut sim, &params);
                        log::info!("forcing mode -> {}", mode.label());
                    }
                    ControlMsg::CycleDuration => {
                        let steps = ctl.cycle_duration();
                        log::info!("duration preset -> {} steps/frame", steps);
                    }
                    ControlMsg::CycleBrightness => {
                        let b = ctl.cycle_brightness();
                        log::info!("brightness preset -> {:.2}", b);
                    }
                }
            }

            for _ in 0..ctl.steps_per_frame() {
                channel_step(&mut sim, &params, ctl.mode());
            }

            sim.snapshot_into(&mut snap_buf);
            let frame = Frame {
                snap: snap_buf,
                mode: ctl.mode(),
                steps_per_frame: ctl.steps_per_frame(),
                brightness: ctl.brightness(),
            };
            if frame_tx.send(frame).is_err() {
                break;
            }
            snap_buf = snap_return_rx
                .try_recv()
                .ok()
                .filter(|b| b.elevation.len() == params.nodes)
                .unwrap_or_else(|| ChannelSnapshot::new_empty(params.nodes));
        }
    });

    let channels = PhysicsChannels { ctrl_tx, frame_rx, snap_return_tx };
    (channels, handle)
}

fn format_status(params: &ChannelParams, frame: &Frame) -> String {
    format!(
        "{} | dx={:.0} dt={:.2} depth={:.0} fric={:.3} | x{} dim={:.2} | step={} t={:.0} | m=mode d=rate b=dim q=quit",
        frame.mode.label(),
        params.dx,
        params.dt,
        params.depth,
        params.friction,
        frame.steps_per_frame,
        frame.brightness,
        frame.snap.step_count,
        frame.snap.sim_time,
    )
}

/// Convert RGBA &[u8] buffer to 0RGB &[u32] buffer for minifb.
fn rgba_to_argb(rgba: &[u8], out: &mut [u32]) {
    for (i, pixel) in rgba.chunks_exact(4).enumerate() {
        out[i] = (pixel[0] as u32) << 16 | (pixel[1] as u32) << 8 | pixel[2] as u32;
    }
}

fn main() {
    env_logger::init();

    let cfg = config::load();
    let params = cfg.channel.to_params();
    if let Err(e) = params.validate() {
        log::error!("invalid channel configuration: {e}");
        std::process::exit(1);
    }
    log::info!(
        "channel: {} nodes, dx={}, dt={} (stability bound {:.3}), depth={}",
        params.nodes,
        params.dx,
        params.dt,
        params.cfl_bound(),
        params.depth,
    );

    let mut render_cfg = renderer::RenderConfig::fit(cfg.display.width, cfg.display.height);
    let mut w = render_cfg.frame_width;
    let mut h = render_cfg.frame_height;

    let mut window = Window::new(
        "undarium",
        w,
        h,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .expect("Failed to create window");

    window.set_target_fps(cfg.display.target_fps);

    // Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let (channels, physics_thread) = spawn_physics_thread(params.clone(), running.clone());
    let PhysicsChannels { ctrl_tx, frame_rx, snap_return_tx } = channels;

    let mut framebuf = vec![0u32; w * h];
    let mut rgba_buf: Vec<u8> = Vec::new();
    let mut frame_count = 0u32;
    let mut last_fps_time = Instant::now();
    let mut last_frame: Option<Frame> = None;

    while window.is_open() && running.load(Ordering::SeqCst) {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No)
            || window.is_key_pressed(Key::Q, KeyRepeat::No)
        {
            break;
        }
        if window.is_key_pressed(Key::M, KeyRepeat::No) {
            let _ = ctrl_tx.send(ControlMsg::AdvanceMode);
        }
        if window.is_key_pressed(Key::D, KeyRepeat::No) {
            let _ = ctrl_tx.send(ControlMsg::CycleDuration);
        }
        if window.is_key_pressed(Key::B, KeyRepeat::No) {
            let _ = ctrl_tx.send(ControlMsg::CycleBrightness);
        }

        // Window resize: refit the frame layout.
        let (new_w, new_h) = window.get_size();
        if new_w != w || new_h != h {
            render_cfg = renderer::RenderConfig::fit(new_w, new_h);
            w = render_cfg.frame_width;
            h = render_cfg.frame_height;
            framebuf = vec![0u32; w * h];
        }

        // Non-blocking: grab the latest frame if available.
        let mut frame = None;
        while let Ok(f) = frame_rx.try_recv() {
            frame = Some(f);
        }

        if let Some(f) = frame {
            let status = format_status(&params, &f);
            renderer::render_into(&mut rgba_buf, &f.snap, &render_cfg, f.mode, f.brightness);
            renderer::render_status(&mut rgba_buf, &render_cfg, &status);
            rgba_to_argb(&rgba_buf, &mut framebuf);
            // Return the old snapshot buffer to the physics thread for reuse.
            if let Some(old) = last_frame.take() {
                let _ = snap_return_tx.send(old.snap);
            }
            last_frame = Some(f);
        } else if let Some(ref f) = last_frame {
            // Redraw the held frame (covers resize between physics frames).
            let status = format_status(&params, f);
            renderer::render_into(&mut rgba_buf, &f.snap, &render_cfg, f.mode, f.brightness);
            renderer::render_status(&mut rgba_buf, &render_cfg, &status);
            rgba_to_argb(&rgba_buf, &mut framebuf);
        }

        window.update_with_buffer(&framebuf, w, h).unwrap();

        frame_count += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            window.set_title(&format!("undarium — {frame_count} fps"));
            frame_count = 0;
            last_fps_time = now;
        }
    }

    // Shutdown
    running.store(false, Ordering::SeqCst);
    drop(frame_rx);
    let _ = physics_thread.join();
}
