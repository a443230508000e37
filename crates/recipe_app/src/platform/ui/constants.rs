pub const PROMPT: &str = "> ";
pub const INDICATOR_CURRENT: char = '●';
pub const INDICATOR_OTHER: char = '○';
pub const RULE: &str = "------------------------------------------------------------";

pub const HELP_TEXT: &str = "\
Commands:
  n, next            show the next recipe
  p, prev            show the previous recipe
  <number>           jump to recipe <number>
  url <link>         set the video link
  submit [<link>]    extract a recipe from the link
  d, delete          delete the shown recipe (asks first)
  r, reload          fetch the recipes again
  clear              dismiss status messages
  h, help            show this help
  q, quit            leave";
