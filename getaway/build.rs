use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        web: { all(target_os = "unknown", target_arch = "wasm32") },
        native: { not(all(target_os = "unknown", target_arch = "wasm32")) },
    }
}
