use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

const PASSWORD_ENV: &str = "SMSSEAL_PASSWORD";

/// Reads the password used to decrypt.
pub fn read_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = from_env_or_pipe()? {
        return Ok(pw);
    }

    if io::stdin().is_terminal() {
        let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
        if !pw.is_empty() {
            return Ok(pw);
        }
    }

    bail!("encrypted text and password are required")
}

/// Reads the password used to encrypt, asking twice on a terminal.
pub fn read_new_password_with_confirmation() -> Result<Zeroizing<String>> {
    if let Some(pw) = from_env_or_pipe()? {
        return Ok(pw);
    }

    if !io::stdin().is_terminal() {
        bail!("message and password are required");
    }

    let pw1 = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    let pw2 = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);

    if pw1.is_empty() {
        bail!("message and password are required");
    }

    if pw1 != pw2 {
        bail!("passwords do not match");
    }

    Ok(pw1)
}

//  SMSSEAL_PASSWORD="supersecret" smsseal decrypt <BLOB>
//  printf "%s" "$PW" | smsseal encrypt "meet at 6"
fn from_env_or_pipe() -> Result<Option<Zeroizing<String>>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Some(Zeroizing::new(pw)));
        }
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(Some(buf));
        }
    }

    Ok(None)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
