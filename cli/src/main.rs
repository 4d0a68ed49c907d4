use clap::Parser;
use shoppath::app::ShopPathApp;
use shoppath::colors::ColorScheme;
use shoppath::display::{display_catalog, display_search_info, display_search_results};
use shoppath::json_output::{create_json_output, print_json_output};
use shoppath::{Args, create_search_request, execute_search, logging};
use tracing::debug;

fn main() {
    let search_args = Args::parse();
    logging::init();
    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    let app = match ShopPathApp::new(search_args.catalog.clone()) {
        Ok(app) => app,
        Err(error_message) => exit_with_error(&colors, &error_message.to_string()),
    };

    let catalog = match app.load_catalog() {
        Ok(catalog) => catalog,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };
    debug!(products = catalog.len(), source = ?app.catalog_path, "catalog loaded");

    if search_args.list && !search_args.json {
        display_catalog(&catalog, &colors);
    }

    let output_json = search_args.json;
    let search_request = match create_search_request(search_args, &catalog) {
        Ok(request) => request,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    if search_request.search_args.verbose && !output_json {
        display_search_info(&search_request, &colors);
    }

    let search_result = match execute_search(search_request, &catalog) {
        Ok(result) => result,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    if output_json {
        print_json_output(&create_json_output(&search_result, &catalog));
    } else {
        display_search_results(search_result, &catalog, &colors);
    }
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
