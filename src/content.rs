//! Static tutorial content.
//!
//! The tutorial is plain data: an ordered list of steps, one complete demo
//! document, and the small bits of chrome (quick-start checklist, highlight
//! cards, header links) rendered around them. Nothing here is logic; the
//! view consumes these constants as-is.

/// One instructional unit in the tutorial sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Short step name shown in the navigator.
    pub title: &'static str,
    /// One-line summary shown under the step heading.
    pub description: &'static str,
    /// Ordered instruction lines.
    pub instructions: &'static [&'static str],
    /// Illustrative code shown in the step's code block.
    pub code: &'static str,
}

/// A feature card shown under the main layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Official Google Identity Services documentation.
pub const DOCS_URL: &str = "https://developers.google.com/identity/gsi/web";

/// Google Cloud Console.
pub const CONSOLE_URL: &str = "https://console.cloud.google.com";

/// The ordered tutorial steps.
pub const STEPS: &[Step] = &[
    Step {
        title: "Navigate to Google Cloud Console",
        description: "Access Google Cloud Console and create your project",
        instructions: &[
            "Go to https://console.cloud.google.com/",
            "Sign in with your Google account",
            "Click 'Select a project' dropdown at the top",
            "Click 'NEW PROJECT' button",
            "Enter your project name (e.g., 'My Login App')",
            "Click 'CREATE' and wait for project creation",
        ],
        code: "// Step 1: Access Google Cloud Console\nhttps://console.cloud.google.com",
    },
    Step {
        title: "Enable Google Identity Services",
        description: "Enable the required APIs for Google Sign-In",
        instructions: &[
            "In your project dashboard, click 'APIs & Services' in left menu",
            "Click 'Library' to browse available APIs",
            "Search for 'Google Identity Services API'",
            "Click on the API and press 'ENABLE'",
            "Wait for the API to be enabled (may take a few minutes)",
        ],
        code: "// Required API: Google Identity Services API",
    },
    Step {
        title: "Create OAuth 2.0 Credentials",
        description: "Set up OAuth credentials for your web application",
        instructions: &[
            "Go to 'APIs & Services' > 'Credentials'",
            "Click '+ CREATE CREDENTIALS' > 'OAuth client ID'",
            "If prompted, configure OAuth consent screen first",
            "Select 'Web application' as application type",
            "Enter name for your OAuth client",
            "Add authorized JavaScript origins (e.g., http://localhost:3000)",
            "Add authorized redirect URIs if needed",
            "Click 'CREATE' and copy your Client ID",
        ],
        code: "// Your OAuth 2.0 Client ID will look like:\n// 123456789-abcdefghijklmnop.apps.googleusercontent.com",
    },
    Step {
        title: "Configure OAuth Consent Screen",
        description: "Set up the consent screen users will see",
        instructions: &[
            "Go to 'APIs & Services' > 'OAuth consent screen'",
            "Choose 'External' user type (unless you have Google Workspace)",
            "Fill in required fields: App name, User support email",
            "Add your email in Developer contact information",
            "Add scopes: email, profile, openid (basic scopes)",
            "Add test users if app is in testing mode",
            "Save and continue through all steps",
        ],
        code: "// Required OAuth scopes for basic login:\n// openid email profile",
    },
    Step {
        title: "Include Google Identity Services",
        description: "Add the new Google Identity Services library",
        instructions: &[
            "Add the Google Identity Services script to your HTML head",
            "Include your OAuth client ID in a meta tag",
            "The new library replaces the old platform.js",
            "Initialize the Google Identity Services in your JavaScript",
        ],
        code: r#"<!-- Add to your HTML <head> section -->
<script src="https://accounts.google.com/gsi/client" async defer></script>
<meta name="google-signin-client_id" content="YOUR_CLIENT_ID.apps.googleusercontent.com">

<!-- Alternative: Load library dynamically -->
<script>
  window.onload = function() {
    google.accounts.id.initialize({
      client_id: 'YOUR_CLIENT_ID.apps.googleusercontent.com',
      callback: handleCredentialResponse
    });
  }
</script>"#,
    },
    Step {
        title: "Create the Sign-In Button",
        description: "Add Google Sign-In button with modern styling",
        instructions: &[
            "Use the new Google Identity Services button",
            "Configure button appearance and behavior",
            "Set up callback function for handling responses",
            "Style the button to match your design",
        ],
        code: r##"<!-- Modern Google Sign-In Button -->
<div id="g_id_onload"
     data-client_id="YOUR_CLIENT_ID.apps.googleusercontent.com"
     data-callback="handleCredentialResponse">
</div>
<div class="g_id_signin" data-type="standard"></div>

<!-- Custom styled button -->
<button id="custom-signin" class="google-signin-btn">
  <svg width="20" height="20" viewBox="0 0 24 24">
    <path fill="#4285F4" d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"/>
    <path fill="#34A853" d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"/>
    <path fill="#FBBC05" d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"/>
    <path fill="#EA4335" d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"/>
  </svg>
  Sign in with Google
</button>"##,
    },
    Step {
        title: "Handle Authentication Response",
        description: "Process the JWT token from Google",
        instructions: &[
            "Create callback function to handle the credential response",
            "Decode the JWT token to get user information",
            "Verify the token on your backend (recommended)",
            "Update your UI based on authentication state",
        ],
        code: r#"function handleCredentialResponse(response) {
  const credential = response.credential;

  const payload = JSON.parse(atob(credential.split('.')[1]));

  console.log('User Info:', {
    id: payload.sub,
    name: payload.name,
    email: payload.email,
    picture: payload.picture
  });

  fetch('/api/auth/google', {
    method: 'POST',
    headers: {
      'Content-Type': 'application/json',
    },
    body: JSON.stringify({ credential: credential })
  })
  .then(response => response.json())
  .then(data => {
    updateUI(data.user);
  })
  .catch(error => {
    console.error('Authentication error:', error);
  });
}"#,
    },
    Step {
        title: "Implement Sign-Out",
        description: "Add sign-out functionality",
        instructions: &[
            "Use Google Identity Services revoke method",
            "Clear user session data",
            "Reset UI to signed-out state",
            "Handle sign-out errors gracefully",
        ],
        code: r#"function signOut() {
  google.accounts.id.disableAutoSelect();

  clearUserSession();

  document.getElementById('signin-section').style.display = 'block';
  document.getElementById('user-section').style.display = 'none';

  console.log('User signed out successfully');
}

function clearUserSession() {
  localStorage.removeItem('user');
  sessionStorage.removeItem('authToken');
}"#,
    },
];

/// Complete working example shown when the demo view is toggled on.
pub const DEMO_DOCUMENT: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Google Sign-In Demo</title>
    <script src="https://accounts.google.com/gsi/client" async defer></script>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            min-height: 100vh;
        }
        .container {
            background: rgba(255, 255, 255, 0.1);
            padding: 30px;
            border-radius: 15px;
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255, 255, 255, 0.2);
        }
        .google-signin-btn {
            display: flex;
            align-items: center;
            gap: 10px;
            background: white;
            color: #333;
            border: none;
            padding: 12px 24px;
            border-radius: 8px;
            font-size: 16px;
            font-weight: 500;
            cursor: pointer;
            transition: box-shadow 0.3s;
            margin: 20px 0;
        }
        .google-signin-btn:hover {
            box-shadow: 0 4px 12px rgba(0,0,0,0.2);
        }
        .user-info {
            text-align: center;
            padding: 20px;
        }
        .user-avatar {
            width: 80px;
            height: 80px;
            border-radius: 50%;
            margin-bottom: 15px;
        }
        .signout-btn {
            background: #ff4757;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 6px;
            cursor: pointer;
            margin-top: 15px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Google Sign-In Demo</h1>
        <p>Click the button below to sign in with your Google account:</p>

        <div id="signin-section">
            <div id="g_id_onload"
                 data-client_id="YOUR_CLIENT_ID.apps.googleusercontent.com"
                 data-callback="handleCredentialResponse">
            </div>
            <div class="g_id_signin" data-type="standard" data-theme="filled_blue"></div>
        </div>

        <div id="user-section" class="user-info" style="display:none;">
            <img id="user-avatar" class="user-avatar" src="" alt="User Avatar">
            <h2 id="user-name"></h2>
            <p id="user-email"></p>
            <button id="signout-btn" class="signout-btn">Sign Out</button>
        </div>
    </div>

    <script>
        function handleCredentialResponse(response) {
            const responsePayload = JSON.parse(atob(response.credential.split('.')[1]));

            document.getElementById('signin-section').style.display = 'none';
            document.getElementById('user-section').style.display = 'block';

            document.getElementById('user-name').textContent = responsePayload.name;
            document.getElementById('user-email').textContent = responsePayload.email;
            document.getElementById('user-avatar').src = responsePayload.picture;

            console.log('User signed in:', responsePayload);
        }

        function signOut() {
            google.accounts.id.disableAutoSelect();
            document.getElementById('signin-section').style.display = 'block';
            document.getElementById('user-section').style.display = 'none';
            console.log('User signed out');
        }

        window.onload = function() {
            google.accounts.id.initialize({
                client_id: 'YOUR_CLIENT_ID.apps.googleusercontent.com',
                callback: handleCredentialResponse
            });

            document.getElementById('signout-btn').addEventListener('click', signOut);
        }
    </script>
</body>
</html>"##;

/// Follow-up checklist shown beside the demo document.
pub const QUICK_START: &[&str] = &[
    "Replace YOUR_CLIENT_ID with your actual Google OAuth client ID",
    "Save the code as an HTML file",
    "Serve it from a web server (not file:// protocol)",
    "Test the Google Sign-In functionality",
];

/// Feature cards shown under the main layout.
pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Console Setup",
        blurb: "Detailed Google Cloud Console navigation with step-by-step instructions.",
    },
    Highlight {
        title: "Modern Code",
        blurb: "Updated examples using Google Identity Services API with JWT tokens.",
    },
    Highlight {
        title: "Security Best Practices",
        blurb: "Learn proper token verification and security considerations.",
    },
    Highlight {
        title: "Live Demo",
        blurb: "Complete working example you can test and modify for your projects.",
    },
];
