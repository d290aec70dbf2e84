//! Move-type specific theme helpers for consistent styling across pages.

use crate::domain::MoveType;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

pub fn btn_active(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "flex-1 rounded-lg px-5 py-2.5 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40 local-glow",
        MoveType::LongDistance => "flex-1 rounded-lg px-5 py-2.5 text-sm font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40 long-glow",
    }
}

pub fn btn_inactive(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "flex-1 rounded-lg px-5 py-2.5 text-sm text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300",
        MoveType::LongDistance => "flex-1 rounded-lg px-5 py-2.5 text-sm text-slate-400 border border-slate-700 hover:border-indigo-600 hover:text-indigo-300",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
        MoveType::LongDistance => "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
    }
}

pub fn input_error() -> &'static str {
    "mt-1 w-full rounded-lg border border-rose-500/60 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-rose-400 focus:outline-none"
}

pub fn checkbox_class(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "h-4 w-4 rounded border-slate-600 bg-slate-950 accent-sky-500",
        MoveType::LongDistance => "h-4 w-4 rounded border-slate-600 bg-slate-950 accent-indigo-500",
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel_border(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "rounded-xl border border-sky-800/50 bg-slate-900/40",
        MoveType::LongDistance => "rounded-xl border border-indigo-800/50 bg-slate-900/40",
    }
}

pub fn panel_solid() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
        MoveType::LongDistance => "rounded-xl border border-indigo-900/40 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
        MoveType::LongDistance => "border-b border-indigo-900/40 bg-indigo-950/30 text-xs uppercase text-indigo-400/70",
    }
}

pub fn table_divider(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "divide-y divide-sky-900/30",
        MoveType::LongDistance => "divide-y divide-indigo-900/30",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "text-sky-300",
        MoveType::LongDistance => "text-indigo-300",
    }
}

pub fn text_secondary() -> &'static str {
    "text-slate-300"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn link_class(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "text-xs font-semibold uppercase tracking-wide text-sky-300 hover:text-sky-100",
        MoveType::LongDistance => "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
    }
}

// ============================================
// SHELL
// ============================================

pub fn header_class(kind: MoveType) -> &'static str {
    match kind {
        MoveType::Local => "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        MoveType::LongDistance => "border-b border-indigo-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
    }
}

pub fn nav_button(kind: MoveType, active: bool) -> &'static str {
    match (kind, active) {
        (MoveType::Local, true) => {
            "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300 local-glow"
        }
        (MoveType::LongDistance, true) => {
            "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300 long-glow"
        }
        (MoveType::Local, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
        }
        (MoveType::LongDistance, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-indigo-700 hover:bg-indigo-900/20 hover:text-indigo-300"
        }
    }
}
