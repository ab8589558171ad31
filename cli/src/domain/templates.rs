//! Contents of the generated `wp-config.php` and `router.php`.

use std::fmt::Write as _;

use crate::domain::layout::TABLE_PREFIX;
use crate::domain::secrets::GeneratedSecrets;

/// Database connection constants. The SQLite drop-in ignores them.
const DB_FIELDS: [&str; 6] = [
    "DB_NAME",
    "DB_USER",
    "DB_PASSWORD",
    "DB_HOST",
    "DB_CHARSET",
    "DB_COLLATE",
];

const CONFIG_FOOTER: &str = r"/* That's all, stop editing! Happy blogging. */

/** Absolute path to the WordPress directory. */
if ( ! defined( 'ABSPATH' ) )
	define( 'ABSPATH', dirname( __FILE__ ) . '/' );

/** Sets up WordPress vars and included files. */
require_once ABSPATH . 'wp-settings.php';
";

/// Request router loaded by `php -S`.
///
/// Directories without a trailing slash are redirected, existing non-PHP
/// files are left to the built-in static handler, existing PHP files run in
/// their own folder, and everything else goes to the front controller.
pub const ROUTER_SCRIPT: &str = r"<?php
$root = $_SERVER['DOCUMENT_ROOT'];
chdir( $root );
$path = '/'.ltrim( parse_url( $_SERVER['REQUEST_URI'] )['path'],'/' );
if ( file_exists( $root.$path ) )
{
	if ( is_dir( $root.$path ) && substr( $path,strlen( $path ) - 1, 1 ) !== '/' )
	{
		header( 'Location: '.rtrim( $path,'/' ).'/' );
		exit;
	}
	if ( strpos( $path,'.php' ) === false )
	{
		return false;
	} else {
		chdir( dirname( $root.$path ) );
		require_once $root.$path;
	}
} else {
	include_once 'index.php';
}";

/// Render `wp-config.php` with the given secrets.
#[must_use]
pub fn render_config(secrets: &GeneratedSecrets) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<?php\n\n");

    out.push_str("/** Database Settings **/\n");
    out.push_str(
        "/** NOTE: We are using an SQLite integration so these are ignored right now. **/\n",
    );
    for field in DB_FIELDS {
        let _ = writeln!(out, "define( {:<15}'' );", format!("'{field}',"));
    }
    out.push('\n');

    out.push_str("/** Authentication Unique Keys and Salts. **/\n");
    for (slot, value) in secrets.iter() {
        let _ = writeln!(out, "define( {:<20}'{value}' );", format!("'{slot}',"));
    }
    out.push('\n');

    let _ = writeln!(out, "$table_prefix = '{TABLE_PREFIX}';\n");
    out.push_str(CONFIG_FOOTER);
    out
}
