const USAGE: &str = "\
usage: wkpdf <options>

  --source URL|file         URL or file to be converted to PDF (mandatory)
  --output file             filename for the PDF (mandatory)
  --portrait                use portrait paper orientation
  --landscape               use landscape paper orientation
  --hcenter                 center output horizontally
  --vcenter                 center output vertically
  --format arg              select paper format (valid values are e.g. A4, A5
                            A3, Legal, Letter, Executive) CAUTION: these values
                            are case-sensitive
  --paginate arg            enable pagination of output (yes|no default: yes)
                            Output page is resized to fit content when paginate=no
  --margin arg              set paper margin in points (same value is used for
                            all 4 margins)
  --stylesheet-media arg    set the CSS media value (default: 'screen')
  --print-background arg    display background images (yes|no default: no)
  --enable-plugins arg      enable plugins (yes|no default: no)
  --ignore-http-errors      generate PDF even if server error occur (e.g.
                            server returns 404 Not Found errors.)
  --save-delay arg          wait x.y seconds after page is loaded
                            before generating the PDF
  --caching arg             caching policy, currently always the protocol default
  --timeout arg             timeout in seconds (default: 3600)
  --username arg            authenticate with this username
  --password arg            authenticate with this password
                            pages with HTTP authentication can also be accessed
                            by using user:password@example.org style URLs
  --help, -h                print help on options
  --version                 print version number
";

pub fn usage_text() -> &'static str {
    USAGE
}

pub fn version_text() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
