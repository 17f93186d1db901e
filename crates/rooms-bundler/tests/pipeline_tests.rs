//! Integration tests for the transform pipeline.

mod helpers;

use helpers::{MemoryAssets, MemoryResolver, TYPE_ERROR_MARKER, collaborators};
use rooms_bundler::{
    AssetRegistry, EnvironmentMode, Error, JobDescription, Module, ModuleGraph, ModuleKind,
    Pipeline, generate_plan,
};

const SEARCH: &str = "https://resources.realitymedia.digital/vue-apps/";

fn job(mode: EnvironmentMode) -> JobDescription {
    generate_plan(mode).jobs.remove(0)
}

fn run(
    mode: EnvironmentMode,
    entry: &str,
    resolver: MemoryResolver,
    assets: MemoryAssets,
) -> (rooms_bundler::Result<ModuleGraph>, AssetRegistry) {
    let job = job(mode);
    let registry = AssetRegistry::new();
    let mut pipeline = Pipeline::for_job(&job, &collaborators(resolver, assets), &registry);
    let graph = ModuleGraph::new(Module::new(job.input.clone(), entry));
    (pipeline.run(graph), registry)
}

#[test]
fn pipeline_follows_job_rules() {
    let job = job(EnvironmentMode::Development);
    let mut pipeline = Pipeline::for_job(
        &job,
        &collaborators(MemoryResolver::new(), MemoryAssets::new()),
        &AssetRegistry::new(),
    );
    assert_eq!(
        pipeline.names(),
        vec!["replace", "resolve", "typescript", "inline_assets"]
    );
    assert_eq!(
        job.transform_names(),
        vec!["resolve", "replace", "typescript", "inline_assets"]
    );
}

#[test]
fn search_base_runtime_import_is_externalized_under_active_url() {
    let job = job(EnvironmentMode::Production);
    let entry = format!("import \"{SEARCH}dist/hubs.js\";\nexport const ready = true;\n");
    // A resolver that could bundle the runtime if it saw the old URL
    let resolver = MemoryResolver::new()
        .bare(&format!("{SEARCH}dist/hubs.js"), "vendor/hubs.js")
        .file("vendor/hubs.js", "export const runtime = 1;\n");

    let registry = AssetRegistry::new();
    let mut pipeline =
        Pipeline::for_job(&job, &collaborators(resolver, MemoryAssets::new()), &registry);
    let graph = pipeline
        .run(ModuleGraph::new(Module::new(job.input.clone(), entry)))
        .unwrap();

    let expected: Vec<&str> = job.external.iter().map(String::as_str).collect();
    assert_eq!(graph.externals(), expected);
    assert_eq!(graph.ids().collect::<Vec<_>>(), vec!["src/rooms/index.ts"]);
    assert!(!graph.contains("vendor/hubs.js"));
    assert!(
        graph
            .entry()
            .unwrap()
            .code
            .contains("https://williamcaseylucas.github.io/vue-apps/dist/hubs.js")
    );
}

#[test]
fn search_base_import_in_loaded_module_is_externalized() {
    let job = job(EnvironmentMode::Development);
    let setup = format!("import '{SEARCH}dist/hubs.js';\nexport const setup = 1;\n");
    let resolver = MemoryResolver::new().file("src/rooms/setup.ts", &setup);

    let registry = AssetRegistry::new();
    let mut pipeline =
        Pipeline::for_job(&job, &collaborators(resolver, MemoryAssets::new()), &registry);
    let graph = pipeline
        .run(ModuleGraph::new(Module::new(
            job.input.clone(),
            "import { setup } from './setup';\n",
        )))
        .unwrap();

    let expected: Vec<&str> = job.external.iter().map(String::as_str).collect();
    assert_eq!(graph.externals(), expected);
    assert!(
        graph
            .get("src/rooms/setup.ts")
            .unwrap()
            .code
            .contains("https://blair-vue-apps.ngrok.io/vue-apps/dist/hubs.js")
    );
}

#[test]
fn resolve_loads_reachable_modules_and_marks_external() {
    let entry = format!(
        "import \"https://blair-vue-apps.ngrok.io/vue-apps/dist/hubs.js\";\nimport {{ setup }} from './shared/setup';\n"
    );
    let resolver = MemoryResolver::new()
        .file("src/rooms/shared/setup.ts", "import './util.ts';\nexport const setup = 1;\n")
        .file("src/rooms/shared/util.ts", "export {};\n");

    let (graph, _) = run(EnvironmentMode::Development, &entry, resolver, MemoryAssets::new());
    let graph = graph.unwrap();

    assert_eq!(
        graph.ids().collect::<Vec<_>>(),
        vec![
            "src/rooms/index.ts",
            "src/rooms/shared/setup.ts",
            "src/rooms/shared/util.ts",
        ]
    );
    assert_eq!(
        graph.externals(),
        vec!["https://blair-vue-apps.ngrok.io/vue-apps/dist/hubs.js"]
    );

    let entry = graph.entry().unwrap();
    assert_eq!(
        entry.imports[1].resolved.as_deref(),
        Some("src/rooms/shared/setup.ts")
    );
}

#[test]
fn unresolved_bare_import_becomes_external() {
    let (graph, _) = run(
        EnvironmentMode::Development,
        "import * as THREE from 'three';\n",
        MemoryResolver::new(),
        MemoryAssets::new(),
    );
    assert_eq!(graph.unwrap().externals(), vec!["three"]);
}

#[test]
fn unresolved_relative_import_is_an_error() {
    let (graph, _) = run(
        EnvironmentMode::Development,
        "import './missing';\n",
        MemoryResolver::new(),
        MemoryAssets::new(),
    );
    assert!(matches!(
        graph.unwrap_err(),
        Error::Collaborator { collaborator: "resolver", .. }
    ));
}

#[test]
fn replace_targets_active_component_base_path() {
    let entry = format!("const panel: string = \"{SEARCH}panels/info.js\";\n");

    let (dev, _) = run(
        EnvironmentMode::Development,
        &entry,
        MemoryResolver::new(),
        MemoryAssets::new(),
    );
    let (prod, _) = run(
        EnvironmentMode::Production,
        &entry,
        MemoryResolver::new(),
        MemoryAssets::new(),
    );

    assert_eq!(
        dev.unwrap().entry().unwrap().code,
        "const panel = \"https://blair-vue-apps.ngrok.io/vue-apps/panels/info.js\";\n"
    );
    assert_eq!(
        prod.unwrap().entry().unwrap().code,
        "const panel = \"https://williamcaseylucas.github.io/vue-apps/panels/info.js\";\n"
    );
}

#[test]
fn typescript_modules_become_javascript() {
    let (graph, _) = run(
        EnvironmentMode::Development,
        "export const size: number = 2;\n",
        MemoryResolver::new(),
        MemoryAssets::new(),
    );
    let graph = graph.unwrap();
    let entry = graph.entry().unwrap();

    assert_eq!(entry.kind, ModuleKind::JavaScript);
    assert_eq!(entry.code, "export const size = 2;\n");
    assert!(entry.source_map.is_some());
}

#[test]
fn type_error_is_propagated_unmodified() {
    let entry = format!("const n: number = 'x'; // {TYPE_ERROR_MARKER}\n");
    let (graph, registry) = run(
        EnvironmentMode::Development,
        &entry,
        MemoryResolver::new(),
        MemoryAssets::new(),
    );

    match graph.unwrap_err() {
        Error::TypeCheck {
            module,
            diagnostics,
        } => {
            assert_eq!(module, "src/rooms/index.ts");
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].code.as_deref(), Some("TS2322"));
            assert_eq!(diagnostics[0].line, Some(1));
        }
        other => panic!("expected type check error, got {other:?}"),
    }
    assert!(registry.is_empty());
}

#[test]
fn asset_below_limit_is_inlined() {
    let resolver = MemoryResolver::new().asset("src/assets/dot.png");
    let assets = MemoryAssets::new().with("src/assets/dot.png", 999);

    let (graph, registry) = run(
        EnvironmentMode::Production,
        "import dot from '../assets/dot.png';\n",
        resolver,
        assets,
    );
    let graph = graph.unwrap();
    let asset = graph.get("src/assets/dot.png").unwrap();

    assert_eq!(asset.kind, ModuleKind::Asset);
    assert!(asset.code.starts_with("export default \"data:image/png;base64,"));
    assert!(asset.asset_url.is_none());
    assert!(registry.is_empty());
}

#[test]
fn asset_at_limit_is_referenced_from_server_base_path() {
    let resolver = MemoryResolver::new().asset("src/assets/sky.jpg");
    let assets = MemoryAssets::new().with("src/assets/sky.jpg", 1000);

    let (graph, registry) = run(
        EnvironmentMode::Production,
        "import sky from '../assets/sky.jpg';\n",
        resolver,
        assets,
    );
    let graph = graph.unwrap();
    let asset = graph.get("src/assets/sky.jpg").unwrap();

    let emitted = registry.for_source("src/assets/sky.jpg").remove(0);
    assert!(
        emitted
            .url
            .starts_with("https://williamcaseylucas.github.io/core-components/")
    );
    assert!(emitted.url.ends_with(".jpg"));
    assert_eq!(emitted.size, 1000);
    assert_eq!(emitted.referrer, "src/rooms/index.ts");
    assert_eq!(asset.code, format!("export default \"{}\";\n", emitted.url));
    assert_eq!(asset.asset_url.as_deref(), Some(emitted.url.as_str()));
}

#[test]
fn asset_above_limit_in_development_uses_dev_server() {
    let resolver = MemoryResolver::new().asset("src/assets/big.svg");
    let assets = MemoryAssets::new().with("src/assets/big.svg", 4096);

    let (graph, registry) = run(
        EnvironmentMode::Development,
        "import big from '../assets/big.svg';\n",
        resolver,
        assets,
    );
    assert!(graph.is_ok());
    assert!(
        registry.all_assets()[0]
            .url
            .starts_with("https://blair-core-components.ngrok.io/")
    );
}

#[test]
fn missing_asset_bytes_fail_the_job() {
    let resolver = MemoryResolver::new().asset("src/assets/gone.png");
    let (graph, _) = run(
        EnvironmentMode::Development,
        "import gone from '../assets/gone.png';\n",
        resolver,
        MemoryAssets::new(),
    );
    assert!(matches!(graph.unwrap_err(), Error::AssetNotFound { .. }));
}
